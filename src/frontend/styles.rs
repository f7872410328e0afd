use web_sys::Document;

const MOBILE_MENU_STYLE_ID: &str = "fx-mobile-menu";
const REVEAL_STYLE_ID: &str = "fx-reveal";

const MOBILE_MENU_CSS: &str = r#"
.mobile-menu {
    position: fixed;
    top: 0;
    right: -100%;
    width: min(80vw, 320px);
    height: 100vh;
    padding: 96px 32px 32px;
    display: flex;
    flex-direction: column;
    gap: 24px;
    background: rgba(15, 23, 42, 0.97);
    backdrop-filter: blur(12px);
    transition: right 0.3s ease;
    z-index: 999;
}
.mobile-menu.active {
    right: 0;
}
.mobile-menu a {
    color: #f8fafc;
    font-size: 1.125rem;
    text-decoration: none;
}
.menu-toggle span {
    display: block;
    width: 24px;
    height: 2px;
    margin: 5px 0;
    background: currentColor;
    transition: transform 0.3s ease, opacity 0.3s ease;
}
@media (min-width: 769px) {
    .menu-toggle,
    .mobile-menu {
        display: none;
    }
}
"#;

const REVEAL_CSS: &str = r#"
@keyframes fx-reveal {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
"#;

/// Appends the mobile-menu and reveal style blocks to `<head>`.
/// Returns how many blocks were newly added.
pub fn inject_styles(document: &Document) -> usize {
    [
        (MOBILE_MENU_STYLE_ID, MOBILE_MENU_CSS),
        (REVEAL_STYLE_ID, REVEAL_CSS),
    ]
    .into_iter()
    .filter(|(id, css)| inject_style(document, id, css))
    .count()
}

fn inject_style(document: &Document, id: &str, css: &str) -> bool {
    if document.get_element_by_id(id).is_some() {
        return false;
    }

    let Some(head) = document.head() else {
        return false;
    };

    let Ok(style) = document.create_element("style") else {
        return false;
    };

    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style).is_ok()
}
