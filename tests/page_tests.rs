use docview::browser::Browser;
use docview::core::models::TargetId;
use docview::errors::DocViewError;
use docview::features::chat::{CHAT_DOC_KEY, CHAT_ROUTE, CHAT_SESSION_KEY};
use docview::features::toggle::{HIDE_LABEL, SHOW_LABEL};
use docview::features::{ChatHandoff, ChatLauncher, ErrorBanner, VisibilityToggle};
use docview::page::{Page, Visibility};

const DOCUMENT_PAGE: &str = r#"<!doctype html>
<html>
<body>
  <div id="error" class="error" style="display: none;"></div>
  <h2>Files <button id="files-button">show</button></h2>
  <ul id="files" style="display: none">
    <li>talk.pdf <div id="summary-0"></div></li>
  </ul>
  <div id="abstract"><p>Abstract text</p></div>
  <button id="abstract-button">hide</button>
</body>
</html>"#;

#[test]
fn toggle_twice_restores_hidden_section_and_label() {
    let page = Page::from_html(DOCUMENT_PAGE);
    let toggle = VisibilityToggle::new(&page);
    let section = TargetId::Named("files".into());
    let button = TargetId::Button("files".into());

    assert_eq!(toggle.toggle("files").unwrap(), Visibility::Visible);
    assert_eq!(page.visibility(&section), Some(Visibility::Visible));
    assert_eq!(page.inner_html(&button).as_deref(), Some(HIDE_LABEL));

    assert_eq!(toggle.toggle("files").unwrap(), Visibility::Hidden);
    assert_eq!(page.visibility(&section), Some(Visibility::Hidden));
    assert_eq!(page.inner_html(&button).as_deref(), Some(SHOW_LABEL));
}

#[test]
fn toggle_hides_section_without_inline_display() {
    let page = Page::from_html(DOCUMENT_PAGE);
    let toggle = VisibilityToggle::new(&page);

    assert_eq!(toggle.toggle("abstract").unwrap(), Visibility::Hidden);
    assert_eq!(
        page.inner_html(&TargetId::Button("abstract".into())).as_deref(),
        Some(SHOW_LABEL)
    );
}

#[test]
fn toggle_without_button_changes_nothing() {
    let page = Page::new().with_element("lonely", "", Visibility::Hidden);
    let err = VisibilityToggle::new(&page).toggle("lonely").unwrap_err();

    assert!(matches!(err, DocViewError::MissingElement(ref id) if id == "lonely-button"));
    assert_eq!(
        page.visibility(&TargetId::Named("lonely".into())),
        Some(Visibility::Hidden)
    );
}

#[test]
fn show_error_reveals_banner_with_exact_text() {
    let page = Page::from_html(DOCUMENT_PAGE);
    let banner = ErrorBanner::new(&page);

    banner.show("Network down").unwrap();
    assert_eq!(page.visibility(&TargetId::Error), Some(Visibility::Visible));
    assert_eq!(page.text_content(&TargetId::Error).as_deref(), Some("Network down"));

    banner.show("Search failed: <timeout>").unwrap();
    assert_eq!(
        page.text_content(&TargetId::Error).as_deref(),
        Some("Search failed: <timeout>")
    );
    assert_eq!(
        page.inner_html(&TargetId::Error).as_deref(),
        Some("Search failed: &lt;timeout&gt;")
    );
}

#[test]
fn show_error_without_banner_element_fails() {
    let page = Page::new();
    assert!(matches!(
        ErrorBanner::new(&page).show("boom"),
        Err(DocViewError::MissingElement(_))
    ));
}

#[test]
fn launch_chat_ignores_missing_document_id() {
    let browser = Browser::new(Page::new(), "/search");
    let launcher = ChatLauncher::new(&browser);

    assert!(launcher.launch(Some("")).is_none());
    assert!(launcher.launch(None).is_none());
    assert!(browser.session().is_empty());
    assert_eq!(browser.location(), "/search");
}

#[test]
fn launch_chat_stores_document_and_navigates() {
    let browser = Browser::new(Page::new(), "/document");
    let launcher = ChatLauncher::new(&browser);

    let handoff = launcher.launch(Some("doc123")).unwrap();
    assert_eq!(handoff.document_id, "doc123");
    assert_eq!(browser.session().get(CHAT_DOC_KEY).as_deref(), Some("doc123"));
    assert_eq!(browser.location(), CHAT_ROUTE);
}

#[test]
fn later_launch_overwrites_earlier_document() {
    let browser = Browser::new(Page::new(), "/search");
    let launcher = ChatLauncher::new(&browser);

    launcher.launch(Some("doc-1"));
    launcher.launch(Some("doc-2"));
    assert_eq!(browser.session().get(CHAT_DOC_KEY).as_deref(), Some("doc-2"));
}

#[test]
fn chat_handoff_is_consumed_once() {
    let browser = Browser::new(Page::new(), "/search");
    let launched = ChatLauncher::new(&browser).launch(Some("doc123")).unwrap();

    let handoff = ChatHandoff::take(browser.session()).unwrap();
    assert_eq!(handoff, launched);
    assert!(ChatHandoff::take(browser.session()).is_none());
    assert!(browser.session().is_empty());
}

#[test]
fn each_launch_gets_its_own_session_id() {
    let browser = Browser::new(Page::new(), "/search");
    let launcher = ChatLauncher::new(&browser);

    let first = launcher.launch(Some("doc123")).unwrap();
    let second = launcher.launch(Some("doc123")).unwrap();
    assert_ne!(first.session_id, second.session_id);
    assert_eq!(
        browser.session().get(CHAT_SESSION_KEY),
        Some(second.session_id.to_string())
    );
}

#[test]
fn handoff_without_stored_session_id_gets_a_fresh_one() {
    let browser = Browser::new(Page::new(), "/chat");
    browser.session().set(CHAT_DOC_KEY, "doc-legacy");

    let handoff = ChatHandoff::take(browser.session()).unwrap();
    assert_eq!(handoff.document_id, "doc-legacy");
    assert!(!handoff.session_id.is_nil());
}
