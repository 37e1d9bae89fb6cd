/// The fixed catalog respondents pick themes from. Validation never checks
/// membership; analytics uses the catalog to resolve free-text mentions.
pub struct Theme {
    pub id: &'static str,
    pub label: &'static str,
}

pub const THEME_CATALOG: &[Theme] = &[
    Theme {
        id: "work-life-balance",
        label: "Work-Life Balance",
    },
    Theme {
        id: "workload",
        label: "Workload",
    },
    Theme {
        id: "management-support",
        label: "Management Support",
    },
    Theme {
        id: "career-growth",
        label: "Career Growth",
    },
    Theme {
        id: "compensation",
        label: "Compensation & Benefits",
    },
    Theme {
        id: "team-culture",
        label: "Team Culture",
    },
    Theme {
        id: "communication",
        label: "Communication",
    },
    Theme {
        id: "recognition",
        label: "Recognition",
    },
];

pub fn theme_label(id: &str) -> Option<&'static str> {
    THEME_CATALOG
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.label)
}
