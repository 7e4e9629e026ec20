use axum::{
    extract::{Form, Path as AxumPath, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use rand::seq::SliceRandom;

use crate::errors::WikiError;
use crate::services::{MarkdownService, SearchService};
use crate::templates;
use crate::types::{AppState, CreateForm, EditForm, Entry, Notice, SearchForm, ViewQuery};
use crate::utils::{encode_path_segment, format_modified};

/// Render a stored entry into a full page
fn entry_page(entry: &Entry, notices: &[Notice]) -> String {
    let markdown_service = MarkdownService::new();
    let content_html = markdown_service.render(&entry.content);
    let modified = entry.modified.and_then(format_modified);
    templates::render_entry(&entry.title, &content_html, modified.as_deref(), notices)
}

fn entry_redirect(title: &str, notice: &str) -> Redirect {
    Redirect::to(&format!(
        "/wiki/{}?notice={}",
        encode_path_segment(title),
        notice
    ))
}

/// Handle index requests: list every entry
pub async fn handle_index(State(state): State<AppState>) -> Result<impl IntoResponse, WikiError> {
    let mut titles = state.store.list_entries()?;
    titles.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

    log::debug!("Index request, {} entries", titles.len());
    Ok(Html(templates::render_index(&titles, &[])))
}

/// Handle entry view requests
pub async fn handle_entry(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Response, WikiError> {
    log::info!("Entry request received: '{}'", title);

    if let Some(entry) = state.store.get_entry(&title)? {
        let notices = match query.notice.as_deref() {
            Some("created") => vec![Notice::success(format!(
                "New page \"{}\" created successfully.",
                entry.title
            ))],
            Some("updated") => vec![Notice::success(format!(
                "Entry \"{}\" updated successfully.",
                entry.title
            ))],
            _ => Vec::new(),
        };
        return Ok(Html(entry_page(&entry, &notices)).into_response());
    }

    log::warn!("Entry not found: '{}'", title);
    let search_service = SearchService::new(state.store.clone());
    let related = search_service.related_titles(&title)?;
    let page = templates::render_not_found(&title, &related);
    Ok((StatusCode::NOT_FOUND, Html(page)).into_response())
}

/// Search reached without a form submission shows nothing useful
pub async fn handle_search_get() -> Redirect {
    Redirect::to("/")
}

/// Handle search form submissions
pub async fn handle_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, WikiError> {
    let query = form.title.trim();
    log::info!("Search request received for query: '{}'", query);

    if query.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    // An exact (case-insensitive) hit behaves like the entry view
    if let Some(entry) = state.store.get_entry(query)? {
        log::debug!("Search query '{}' matched entry '{}'", query, entry.title);
        return Ok(Html(entry_page(&entry, &[])).into_response());
    }

    let search_service = SearchService::new(state.store.clone());
    let related = search_service.related_titles(query)?;
    Ok(Html(templates::render_search_results(query, &related)).into_response())
}

/// Show the empty create form
pub async fn handle_create_get() -> Html<String> {
    Html(templates::render_create_form("", "", &[]))
}

/// Handle new-page submissions
pub async fn handle_create(
    State(state): State<AppState>,
    Form(form): Form<CreateForm>,
) -> Result<Response, WikiError> {
    let title = form.title.trim();
    log::info!("Create request received for title: '{}'", title);

    if title.is_empty() || form.text.trim().is_empty() {
        let notices = vec![Notice::error(
            "Both a title and page content are required, please try again.",
        )];
        let page = templates::render_create_form(title, &form.text, &notices);
        return Ok(Html(page).into_response());
    }

    // Duplicate check is case-insensitive; the existing entry stays untouched
    if let Some(existing) = state.store.get_entry(title)? {
        log::warn!("Create rejected, title already exists: '{}'", existing.title);
        let notices = vec![Notice::error(format!(
            "A page titled \"{}\" already exists. Edit that page instead.",
            existing.title
        ))];
        let page = templates::render_create_form(title, &form.text, &notices);
        return Ok(Html(page).into_response());
    }

    state.store.save_entry(title, &form.text)?;
    Ok(entry_redirect(title, "created").into_response())
}

/// Show the edit form, pre-populated when the entry exists
pub async fn handle_edit_get(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Html<String>, WikiError> {
    log::debug!("Edit form requested for: '{}'", title);

    let page = match state.store.get_entry(&title)? {
        Some(entry) => templates::render_edit_form(&entry.title, &entry.content, &[]),
        None => {
            let notices = vec![Notice::error(format!(
                "\"{}\" does not exist yet; saving will create it.",
                title
            ))];
            templates::render_edit_form(&title, "", &notices)
        }
    };
    Ok(Html(page))
}

/// Handle edit submissions: full replacement of the entry content
pub async fn handle_edit(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
    Form(form): Form<EditForm>,
) -> Result<Response, WikiError> {
    log::info!("Edit request received for title: '{}'", title);

    if form.text.trim().is_empty() {
        let notices = vec![Notice::error(
            "Page content cannot be empty; nothing was saved.",
        )];
        let page = templates::render_edit_form(&title, &form.text, &notices);
        return Ok(Html(page).into_response());
    }

    // Keep the canonical stored casing when the entry already exists, so an
    // edit reached via a differently-cased URL does not fork the page
    let canonical = match state.store.get_entry(&title)? {
        Some(existing) => existing.title,
        None => title,
    };

    state.store.save_entry(&canonical, &form.text)?;
    Ok(entry_redirect(&canonical, "updated").into_response())
}

/// Redirect to a uniformly random entry
pub async fn handle_random(State(state): State<AppState>) -> Result<Redirect, WikiError> {
    let titles = state.store.list_entries()?;
    let Some(title) = titles.choose(&mut rand::thread_rng()) else {
        log::warn!("Random entry requested but the wiki is empty");
        return Err(WikiError::NoEntries);
    };

    log::debug!("Random pick: '{}'", title);
    Ok(Redirect::to(&format!("/wiki/{}", encode_path_segment(title))))
}
