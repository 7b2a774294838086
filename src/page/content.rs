//! Literal page content.
//!
//! Sections are listed in display order; the table of contents is derived
//! from the same list.

pub const OWNER_NAME: &str = "Sabrina Button";
pub const CONTACT_EMAIL: &str = "mailto:sabrinarosebutton@gmail.com";
pub const CONTACT_LABEL: &str = "contact me";
pub const CONTACT_ANCHOR: &str = "contact";
pub const TOC_HEADING: &str = "table of contents";
pub const COPYRIGHT: &str = "© Sabrina Button 2025";
pub const LOGO_SRC: &str = "sb-logo.png";
pub const LOGO_ALT: &str = "Logo";

/// Glyph appended to links that leave the page.
pub const OUTBOUND_MARKER: char = '↗';

// ============================================================================
// Links
// ============================================================================

/// What a link's target is, derived from its href.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-document `#anchor`.
    Anchor,
    /// `mailto:` direct action.
    Mail,
    /// Downloadable file hosted next to the page.
    Document,
    /// Another site.
    External,
}

impl LinkKind {
    pub fn of(href: &str) -> Self {
        if href.starts_with('#') {
            Self::Anchor
        } else if href.starts_with("mailto:") {
            Self::Mail
        } else if href.starts_with("http://") || href.starts_with("https://") {
            Self::External
        } else {
            Self::Document
        }
    }

    /// Links that navigate away from the page carry the outbound marker.
    pub fn is_outbound(self) -> bool {
        matches!(self, Self::External | Self::Document)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
    /// Rendered as `[label]`.
    pub bracketed: bool,
    /// Opens in a new browsing context.
    pub new_tab: bool,
}

impl Link {
    pub const fn new(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            bracketed: false,
            new_tab: false,
        }
    }

    pub const fn bracketed(self) -> Self {
        Self {
            bracketed: true,
            ..self
        }
    }

    pub const fn new_tab(self) -> Self {
        Self {
            new_tab: true,
            ..self
        }
    }

    pub fn kind(&self) -> LinkKind {
        LinkKind::of(self.href)
    }

    /// Visible text, including brackets and the outbound marker.
    pub fn display_text(&self) -> String {
        let marker = if self.kind().is_outbound() {
            OUTBOUND_MARKER.to_string()
        } else {
            String::new()
        };
        if self.bracketed {
            format!("[{}{marker}]", self.label)
        } else {
            format!("{}{marker}", self.label)
        }
    }
}

// ============================================================================
// Rich text
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Bold(&'static str),
    Italic(&'static [Inline]),
    Link(Link),
    Break,
}

pub type Paragraph = &'static [Inline];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub anchor: &'static str,
    pub numeral: &'static str,
    /// Table-of-contents label.
    pub label: &'static str,
    /// Heading title; may qualify the label.
    pub title: &'static str,
    pub paragraphs: &'static [Paragraph],
}

impl Section {
    /// Heading text, e.g. `i. about`.
    pub fn heading(&self) -> String {
        format!("{} {}", self.numeral, self.title)
    }
}

const fn link(href: &'static str, label: &'static str) -> Inline {
    Inline::Link(Link::new(href, label))
}

const fn bracket(href: &'static str, label: &'static str) -> Inline {
    Inline::Link(Link::new(href, label).bracketed())
}

const fn document(href: &'static str, label: &'static str) -> Inline {
    Inline::Link(Link::new(href, label).bracketed().new_tab())
}

const AQUATONOMOUS: &str = "https://aquatonomous.ca";

pub const SECTIONS: [Section; 6] = [
    Section {
        anchor: "about",
        numeral: "i.",
        label: "about",
        title: "about",
        paragraphs: &[&[
            Inline::Bold("I build autonomous systems for unpredictable environments."),
            Inline::Text(
                " My work focuses on state estimation and control, leveraging robotics to \
                 (1) solve the democratization of transportation, and (2) enable ecological \
                 monitoring in harsh environments by deploying resident systems.",
            ),
        ]],
    },
    Section {
        anchor: "experience",
        numeral: "ii.",
        label: "experience",
        title: "experience",
        paragraphs: &[
            &[
                link(
                    "https://www.rheinmetall.com/en/company/subsidiaries/provectus-robotics-solutions",
                    "Provectus Robotics Solutions",
                ),
                Inline::Text(" (aq. Rheinmetall), "),
                Inline::Italic(&[Inline::Text("Robotics Engineer Intern")]),
                Inline::Text(" (2025)"),
            ],
            &[
                link(AQUATONOMOUS, "aQuatonomous"),
                Inline::Text(", "),
                Inline::Italic(&[Inline::Text("Co-Founder and Co-Captain")]),
                Inline::Text(" (2023-2025)"),
            ],
            &[
                link("https://www.nvidia.com/en-us/", "NVIDIA"),
                Inline::Text(", "),
                Inline::Italic(&[Inline::Text("Autonomous Vehicle Software Engineer Intern")]),
                Inline::Text(" (2024)"),
            ],
            &[
                link(
                    "https://ingenuitylabs.queensu.ca/",
                    "Ingenuity Labs Research Institute",
                ),
                Inline::Text(", "),
                Inline::Italic(&[Inline::Text("Undergraduate Research Fellow")]),
                Inline::Text(" (2023)"),
            ],
        ],
    },
    Section {
        anchor: "publications",
        numeral: "iii.",
        label: "publications",
        title: "publications",
        paragraphs: &[&[
            Inline::Text(
                "Thomas M. C. Sears, M. Riley Cooper, Sabrina R. Button, Joshua A. Marshall. \
                 (2024). OtterROS: Picking and Programming an Uncrewed Surface Vessel for \
                 Experimental Field Robotics Research with ROS 2. IEEE ICRA Workshop on Field \
                 Robotics 2024. IEEE International Conference on Robotics and Automation (ICRA) ",
            ),
            bracket("https://arxiv.org/abs/2404.05627", "arXiv"),
        ]],
    },
    Section {
        anchor: "projects",
        numeral: "iv.",
        label: "projects",
        title: "(featured) projects",
        paragraphs: &[
            &[
                Inline::Text(
                    "Simultaneous Planning and Control of an Autonomous Surface Vehicle ",
                ),
                document("/button-proposal-arctic-asv.pdf", "Proposal"),
            ],
            &[
                Inline::Text("Underwater Swarm Robots for Diluted Bitumen Mapping "),
                Inline::Bold("[In Progress]"),
            ],
            &[
                Inline::Text("Nautical Disaster Autonomous Surface Vehicle "),
                bracket("https://aquatonomous.vercel.app/asv", "Overview"),
            ],
            &[
                Inline::Text("Computer Vision Driven Autonomous Pet Feeder "),
                bracket("https://youtu.be/ULbh-ibkO7Q", "Demo"),
            ],
            &[
                Inline::Text(
                    "Continuous Differential Omni-Directional Mobile Robot Design and Control ",
                ),
                document("/omni-diff-drive.pdf", "Paper"),
            ],
            &[
                Inline::Text("CO2 Spatiotemporal Mapping Rover "),
                bracket("https://github.com/sabrinabutton/ros-slam-heat-map", "GitHub"),
            ],
        ],
    },
    Section {
        anchor: "education",
        numeral: "v.",
        label: "education",
        title: "education",
        paragraphs: &[
            &[
                Inline::Text("B.A.Sc. Mechatronics and Robotics Engineering, "),
                Inline::Italic(&[Inline::Text("Queen’s University")]),
                Inline::Text(" (2026)"),
            ],
            &[Inline::Italic(&[
                Inline::Text("USSRF - $11,000 (2023)"),
                Inline::Break,
                Inline::Text("Schulich Leader Scholarship - $100,000 (2021)"),
                Inline::Break,
                Inline::Text("Ingenium-NSERC Steam Horizon Award - $25,000 (2021)"),
            ])],
        ],
    },
    Section {
        anchor: "origins",
        numeral: "vi.",
        label: "origins",
        title: "origins",
        paragraphs: &[
            &[
                Inline::Bold("2019"),
                Inline::Text(
                    " - Landed my first software development role at age 16 after shipping a \
                     roguelike game during a hackathon.",
                ),
            ],
            &[
                Inline::Bold("2021"),
                Inline::Text(
                    " - Joined the inaugural cohort of Mechatronics and Robotics Engineering at \
                     Queen’s University",
                ),
            ],
            &[
                Inline::Bold("2023"),
                Inline::Text(
                    " - Conducted experimental field robotics research with the Offroad Robotics \
                     group at Ingenuity Labs. Learned how robotics can have a positive impact on \
                     the planet. Started ",
                ),
                link(AQUATONOMOUS, "aQuatonomous"),
                Inline::Text(
                    ", a student design team, to design and build a robotic boat to carry out \
                     critical water research efforts on Lake Ontario.",
                ),
            ],
            &[
                Inline::Bold("2024"),
                Inline::Text(" - Scaled "),
                link(AQUATONOMOUS, "aQuatonomous"),
                Inline::Text(
                    " to 60+ members and raised $35k in funding. Interned at NVIDIA (AV \
                     planning). Published my first paper on field robotics.",
                ),
            ],
            &[
                Inline::Bold("2025"),
                Inline::Text(
                    " - Tackled R&D on a small team at Provectus Robotics Solutions. Deployed \
                     planning algorithms currently running on off-road trucks in Europe.",
                ),
            ],
        ],
    },
];

/// External profiles shown in the footer, in order.
pub const PROFILES: [Link; 3] = [
    Link::new("https://github.com/sabrinabutton", "GitHub").new_tab(),
    Link::new("https://www.linkedin.com/in/sabrinabutton/", "LinkedIn").new_tab(),
    Link::new("https://medium.com/@sabrinarosebutton", "Medium").new_tab(),
];

pub const PROFILE_SEPARATOR: &str = " / ";

/// Static files the page references, relative to the site root.
pub fn referenced_assets() -> Vec<&'static str> {
    let mut assets = vec![LOGO_SRC];
    for section in &SECTIONS {
        for paragraph in section.paragraphs {
            collect_documents(paragraph, &mut assets);
        }
    }
    assets
}

fn collect_documents(inlines: &[Inline], out: &mut Vec<&'static str>) {
    for inline in inlines {
        match inline {
            Inline::Link(link) if link.kind() == LinkKind::Document => {
                let path = link.href.trim_start_matches('/');
                if !out.contains(&path) {
                    out.push(path);
                }
            }
            Inline::Italic(children) => collect_documents(children, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_kind() {
        assert_eq!(LinkKind::of("#about"), LinkKind::Anchor);
        assert_eq!(LinkKind::of(CONTACT_EMAIL), LinkKind::Mail);
        assert_eq!(LinkKind::of("https://arxiv.org/abs/2404.05627"), LinkKind::External);
        assert_eq!(LinkKind::of("/omni-diff-drive.pdf"), LinkKind::Document);
        assert!(LinkKind::Document.is_outbound());
        assert!(!LinkKind::Mail.is_outbound());
    }

    #[test]
    fn test_display_text_marker_placement() {
        let arxiv = Link::new("https://arxiv.org/abs/2404.05627", "arXiv").bracketed();
        assert_eq!(arxiv.display_text(), "[arXiv↗]");
        let nvidia = Link::new("https://www.nvidia.com/en-us/", "NVIDIA");
        assert_eq!(nvidia.display_text(), "NVIDIA↗");
        let mail = Link::new(CONTACT_EMAIL, CONTACT_LABEL);
        assert_eq!(mail.display_text(), "contact me");
        let anchor = Link::new("#about", "about");
        assert_eq!(anchor.display_text(), "about");
    }

    #[test]
    fn test_sections_order_and_numerals() {
        let anchors: Vec<_> = SECTIONS.iter().map(|s| s.anchor).collect();
        assert_eq!(
            anchors,
            ["about", "experience", "publications", "projects", "education", "origins"]
        );
        let numerals: Vec<_> = SECTIONS.iter().map(|s| s.numeral).collect();
        assert_eq!(numerals, ["i.", "ii.", "iii.", "iv.", "v.", "vi."]);
    }

    #[test]
    fn test_headings() {
        assert_eq!(SECTIONS[0].heading(), "i. about");
        assert_eq!(SECTIONS[2].heading(), "iii. publications");
        assert_eq!(SECTIONS[3].heading(), "iv. (featured) projects");
    }

    #[test]
    fn test_referenced_assets() {
        assert_eq!(
            referenced_assets(),
            vec!["sb-logo.png", "button-proposal-arctic-asv.pdf", "omni-diff-drive.pdf"]
        );
    }

    #[test]
    fn test_document_links_open_in_new_tab() {
        let documents: Vec<Link> = SECTIONS
            .iter()
            .flat_map(|s| s.paragraphs.iter())
            .flat_map(|p| p.iter())
            .filter_map(|inline| match inline {
                Inline::Link(link) if link.kind() == LinkKind::Document => Some(*link),
                _ => None,
            })
            .collect();
        assert_eq!(documents.len(), 2);
        assert!(documents.iter().all(|l| l.new_tab && l.bracketed));
    }
}
