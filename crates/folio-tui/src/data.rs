//! Static page content, one [`Page`] per section id

/// One titled block of text inside a page
pub struct Entry {
    pub title: &'static str,
    pub meta: &'static str,
    pub body: &'static str,
}

pub struct Page {
    pub id: &'static str,
    /// Short label for the navbar and section indicator
    pub label: &'static str,
    /// Page heading; `None` shows the owner's name
    pub heading: Option<&'static str>,
    pub tagline: &'static str,
    pub entries: &'static [Entry],
}

pub const PAGES: &[Page] = &[
    Page {
        id: "hero",
        label: "Home",
        heading: None,
        tagline: "Informatics student | Data & AI enthusiast | Problem solver",
        entries: &[],
    },
    Page {
        id: "about",
        label: "About",
        heading: Some("About Me"),
        tagline: "Curious about optimization, statistics, logic and new technologies.",
        entries: &[
            Entry {
                title: "Music",
                meta: "",
                body: "Patience, precision and creativity, and a better ear for how a message lands.",
            },
            Entry {
                title: "Gaming",
                meta: "",
                body: "Perseverance, strategic planning and teamwork.",
            },
            Entry {
                title: "Asian culture",
                meta: "",
                body: "An open mind for viewpoints from all over the world.",
            },
        ],
    },
    Page {
        id: "resume",
        label: "Studies",
        heading: Some("Studies"),
        tagline: "Mathematics first, then data and artificial intelligence.",
        entries: &[
            Entry {
                title: "Engineering degree, Data & AI",
                meta: "Engineering school",
                body: "Machine learning, statistical analysis, probability and programming in Python.",
            },
            Entry {
                title: "Preparatory classes, MPSI",
                meta: "Two years",
                body: "Intensive mathematics, physics and engineering sciences.",
            },
            Entry {
                title: "Baccalaureate, Mathematics & Physics",
                meta: "High school",
                body: "A solid scientific foundation and a taste for logical reasoning.",
            },
        ],
    },
    Page {
        id: "projects",
        label: "Projects",
        heading: Some("Projects"),
        tagline: "Things built along the way.",
        entries: &[
            Entry {
                title: "AI Trash Bin Detector",
                meta: "Computer vision",
                body: "Classifies waste from a camera feed to pick the right bin.",
            },
            Entry {
                title: "Security Alerts Analysis",
                meta: "Data analysis",
                body: "Parses published vulnerability bulletins and charts their severity over time.",
            },
            Entry {
                title: "Connect 4",
                meta: "Algorithms",
                body: "Minimax with alpha-beta pruning that plays a decent game.",
            },
        ],
    },
    Page {
        id: "blog",
        label: "Blog",
        heading: Some("Blog"),
        tagline: "Notes on data, algorithms and everything between.",
        entries: &[
            Entry {
                title: "The Compressed Truth",
                meta: "Article",
                body: "What a compression ratio says about how predictable a text is.",
            },
            Entry {
                title: "Exploring AI Bias in Datasets",
                meta: "Coming soon",
                body: "",
            },
            Entry {
                title: "Optimizing Algorithms with Python",
                meta: "Coming soon",
                body: "",
            },
        ],
    },
    Page {
        id: "passions",
        label: "Passions",
        heading: Some("Passions"),
        tagline: "What keeps me busy away from the keyboard (and sometimes at it).",
        entries: &[
            Entry {
                title: "Gaming",
                meta: "",
                body: "Strategy games and the teams behind them.",
            },
            Entry {
                title: "Music",
                meta: "",
                body: "Years of practice, one note at a time.",
            },
            Entry {
                title: "Asian Culture",
                meta: "",
                body: "Language, food, cinema.",
            },
            Entry {
                title: "Stats & Logic",
                meta: "",
                body: "Puzzles, probabilities and the occasional paradox.",
            },
        ],
    },
];

/// Content for a section id, if any exists
pub fn page(id: &str) -> Option<&'static Page> {
    PAGES.iter().find(|p| p.id == id)
}

/// Navbar label for a section id, falling back to the id itself
pub fn label<'a>(id: &'a str) -> &'a str {
    page(id).map(|p| p.label).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::DEFAULT_SECTIONS;

    #[test]
    fn test_every_default_section_has_a_page() {
        for id in DEFAULT_SECTIONS {
            assert!(page(id).is_some(), "missing page for {}", id);
        }
    }

    #[test]
    fn test_label_falls_back_to_id() {
        assert_eq!(label("resume"), "Studies");
        assert_eq!(label("contact"), "contact");
    }
}
