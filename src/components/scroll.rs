use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::MobileMenu;

/// Resolves an in-page fragment and smooth-scrolls its top edge to the top
/// of the viewport. Returns whether the fragment resolved; an unknown
/// fragment is a no-op.
pub fn scroll_to_fragment(fragment: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(target) = document.get_element_by_id(fragment) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Mobile-menu state after an anchor activation: navigating to a resolved
/// fragment closes the menu, a dead fragment changes nothing.
fn menu_after_anchor(fragment_resolved: bool, menu_open: bool) -> bool {
    menu_open && !fragment_resolved
}

/// Click handler for an in-page anchor: suppresses navigation,
/// smooth-scrolls to the fragment, and closes the mobile menu when the
/// fragment resolves. Every in-page anchor on the site goes through here,
/// wherever it lives.
#[hook]
pub fn use_scroll_link(fragment: &'static str) -> Callback<MouseEvent> {
    let menu = use_context::<MobileMenu>();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let resolved = scroll_to_fragment(fragment);
        if let Some(menu) = &menu {
            let open = *menu.0;
            let next = menu_after_anchor(resolved, open);
            if next != open {
                menu.0.set(next);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::menu_after_anchor;

    #[test]
    fn resolved_fragment_closes_an_open_menu() {
        assert!(!menu_after_anchor(true, true));
    }

    #[test]
    fn dead_fragment_leaves_the_menu_alone() {
        assert!(menu_after_anchor(false, true));
        assert!(!menu_after_anchor(false, false));
    }

    #[test]
    fn closed_menu_stays_closed() {
        assert!(!menu_after_anchor(true, false));
    }
}
