use bizdash_core::{NavEntry, NavTable};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, NavItemViewModel, NavViewModel, StatusBadge,
};

fn item(entry: &NavEntry) -> NavItemViewModel {
    NavItemViewModel {
        label: entry.label.clone(),
        path: entry.path.clone(),
        icon: entry.icon.clone(),
        depth: entry.depth,
    }
}

/// Whole tree, or the breadcrumb of `route` when one is given.
pub fn present_nav(table: &NavTable, route: Option<&str>) -> CommandResultViewModel<NavViewModel> {
    let Some(route) = route else {
        let content = NavViewModel {
            items: table.entries().iter().map(item).collect(),
            route: None,
        };
        return CommandResultViewModel::new(content);
    };

    let items: Vec<NavItemViewModel> = table.breadcrumb(route).into_iter().map(item).collect();
    let matched = !items.is_empty();
    let result = CommandResultViewModel::new(NavViewModel {
        items,
        route: Some(route.to_string()),
    });

    if matched {
        result
    } else {
        result
            .with_badge(StatusBadge::warning(format!("Unknown route {}", route)))
            .with_suggestion(Guidance::new("List every route").with_command("bizdash nav"))
    }
}
