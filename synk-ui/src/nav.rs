//! Routes and the sidebar's static navigation list.

use crate::components::icons::Icon;

pub mod routes {
    pub const HOME: &str = "/";
    pub const SIGN_IN: &str = "/auth/sign-in";
    pub const SIGN_UP: &str = "/auth/sign-up";
    pub const WELCOME: &str = "/welcome";
    pub const MEETINGS: &str = "/meetings";
    pub const AGENTS: &str = "/agents";
    pub const UPGRADE: &str = "/upgrade";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub const MAIN_SECTION: [NavEntry; 2] = [
    NavEntry {
        icon: Icon::Video,
        label: "Meetings",
        href: routes::MEETINGS,
    },
    NavEntry {
        icon: Icon::Bot,
        label: "Agents",
        href: routes::AGENTS,
    },
];

pub const SECONDARY_SECTION: [NavEntry; 1] = [NavEntry {
    icon: Icon::Star,
    label: "Upgrade",
    href: routes::UPGRADE,
}];

const ENTRY_BASE: &str = "h-10 flex items-center gap-2 px-2 rounded-md font-sans border border-transparent \
     hover:bg-gradient-to-r hover:border-[#5D6B68]/10 from-sidebar-accent from-5% via-30% via-sidebar/50 to-sidebar/50";
const ENTRY_ACTIVE: &str = "bg-gradient-to-r border-[#5D6B68]/10";

/// Exact path match; no prefix matching
pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    entry.href == current_path
}

pub fn entry_classes(active: bool) -> String {
    if active {
        format!("{} {}", ENTRY_BASE, ENTRY_ACTIVE)
    } else {
        ENTRY_BASE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_entries() -> impl Iterator<Item = &'static NavEntry> {
        MAIN_SECTION.iter().chain(SECONDARY_SECTION.iter())
    }

    fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
        all_entries().find(|entry| is_active(entry, current_path))
    }

    #[test]
    fn test_agents_route_activates_only_agents() {
        let active: Vec<_> = all_entries()
            .filter(|e| is_active(e, "/agents"))
            .map(|e| e.label)
            .collect();
        assert_eq!(active, vec!["Agents"]);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(active_entry("/agents/42").is_none());
        assert!(active_entry("/").is_none());
        assert_eq!(active_entry("/upgrade").map(|e| e.label), Some("Upgrade"));
    }

    #[test]
    fn test_sections_in_order() {
        let labels: Vec<_> = all_entries().map(|e| (e.label, e.href)).collect();
        assert_eq!(
            labels,
            vec![("Meetings", "/meetings"), ("Agents", "/agents"), ("Upgrade", "/upgrade")]
        );
    }

    #[test]
    fn test_active_classes() {
        assert!(entry_classes(true).ends_with(ENTRY_ACTIVE));
        assert!(!entry_classes(false).contains(ENTRY_ACTIVE));
    }
}
