//! Static site copy — nav items, hero stats, service cards, selling points.

pub const FIRM_NAME: &str = "Crestline Finserv";
pub const FIRM_TAGLINE: &str = "Financial planning that stays the course";

pub struct NavItem {
    pub label: &'static str,
    /// Section id the link points at (`#target`).
    pub target: &'static str,
}

pub const NAV_LINKS: &[NavItem] = &[
    NavItem {
        label: "Home",
        target: "home",
    },
    NavItem {
        label: "About",
        target: "about",
    },
    NavItem {
        label: "Services",
        target: "services",
    },
    NavItem {
        label: "Why Us",
        target: "why-us",
    },
    NavItem {
        label: "Contact",
        target: "contact",
    },
];

pub struct Stat {
    pub label: &'static str,
    /// Raw counter target, rendered into the `data-target` attribute.
    /// Non-numeric text is displayed as-is, unanimated.
    pub target: &'static str,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        label: "Families advised",
        target: "2400",
        suffix: "+",
    },
    Stat {
        label: "Years in practice",
        target: "18",
        suffix: "",
    },
    Stat {
        label: "Crores under advice",
        target: "950",
        suffix: "+",
    },
    Stat {
        label: "Client retention",
        target: "97",
        suffix: "%",
    },
];

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "service-mutual-funds",
        title: "Mutual Fund Advisory",
        blurb: "Goal-linked portfolios built from researched fund selections, \
                reviewed and rebalanced through every market cycle.",
    },
    Service {
        id: "service-insurance",
        title: "Insurance Planning",
        blurb: "Term, health, and asset cover sized to what your family \
                actually needs — no padding, no gaps.",
    },
    Service {
        id: "service-retirement",
        title: "Retirement Planning",
        blurb: "A paced accumulation plan that turns into a predictable \
                income stream the day you stop working.",
    },
    Service {
        id: "service-tax",
        title: "Tax Planning",
        blurb: "Investment choices that keep your tax outgo efficient across \
                financial years, not just in March.",
    },
    Service {
        id: "service-loans",
        title: "Loan Assistance",
        blurb: "Home and business loan structuring with lenders we have \
                negotiated with for over a decade.",
    },
    Service {
        id: "service-estate",
        title: "Estate & Succession",
        blurb: "Wills, nominations, and transmission paperwork arranged so \
                wealth moves to the next generation without friction.",
    },
];

pub struct SellingPoint {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SELLING_POINTS: &[SellingPoint] = &[
    SellingPoint {
        id: "why-fiduciary",
        title: "Advice first, products second",
        blurb: "Recommendations start from your goals, never from a sales target.",
    },
    SellingPoint {
        id: "why-track-record",
        title: "Eighteen years of market cycles",
        blurb: "We have steered client portfolios through crashes, rallies, and everything between.",
    },
    SellingPoint {
        id: "why-transparent",
        title: "Transparent reporting",
        blurb: "Every holding, every cost, every review — documented and shared.",
    },
    SellingPoint {
        id: "why-accessible",
        title: "A call away",
        blurb: "Your advisor answers the phone, in your language, when markets get loud.",
    },
];

pub const CONTACT_PHONE: &str = "+91 98200 00000";
pub const CONTACT_EMAIL: &str = "hello@crestlinefinserv.in";
pub const CONTACT_ADDRESS: &str = "402 Lakeview Chambers, Senapati Bapat Marg, Mumbai 400013";
