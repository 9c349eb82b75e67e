//! Work history shown on the experience map.

use XpCategory::*;

/// Filter chips on the experience map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XpCategory {
	/// Internships.
	Internship,
	/// Fellowships.
	Fellowship,
	/// Research roles.
	Research,
	/// Leadership roles.
	Leadership,
	/// Product work.
	Product,
	/// AI and machine learning.
	AiMl,
	/// Data work.
	Data,
	/// Systems work.
	Systems,
}

impl XpCategory {
	/// Every category, in chip order.
	pub const ALL: [XpCategory; 8] = [
		Self::Internship,
		Self::Fellowship,
		Self::Research,
		Self::Leadership,
		Self::Product,
		Self::AiMl,
		Self::Data,
		Self::Systems,
	];

	/// Chip label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Internship => "Internship",
			Self::Fellowship => "Fellowship",
			Self::Research => "Research",
			Self::Leadership => "Leadership",
			Self::Product => "Product",
			Self::AiMl => "AI/ML",
			Self::Data => "Data",
			Self::Systems => "Systems",
		}
	}
}

/// Working arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkMode {
	/// In the office.
	OnSite,
	/// Fully remote.
	Remote,
	/// Split.
	Hybrid,
	/// Recurring, part of the year.
	Seasonal,
	/// Part time.
	PartTime,
	/// Own venture.
	SelfEmployed,
}

impl WorkMode {
	/// Display label.
	pub fn label(self) -> &'static str {
		match self {
			Self::OnSite => "On-site",
			Self::Remote => "Remote",
			Self::Hybrid => "Hybrid",
			Self::Seasonal => "Seasonal",
			Self::PartTime => "Part-time",
			Self::SelfEmployed => "Self-employed",
		}
	}
}

/// External link on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkRef {
	/// Button text.
	pub label: &'static str,
	/// Target URL.
	pub href: &'static str,
}

/// One role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
	/// Slug used in `#exp=` links.
	pub id: &'static str,
	/// Role title.
	pub title: &'static str,
	/// Organization.
	pub org: &'static str,
	/// `YYYY-MM`.
	pub start: Option<&'static str>,
	/// `YYYY-MM`; `None` while ongoing.
	pub end: Option<&'static str>,
	/// Free-form date text when no start month is known.
	pub dates_label: Option<&'static str>,
	/// City.
	pub location: Option<&'static str>,
	/// Working arrangement.
	pub mode: Option<WorkMode>,
	/// One-line summary.
	pub summary: &'static str,
	/// Bullet points.
	pub details: &'static [&'static str],
	/// Skill chips.
	pub skills: &'static [&'static str],
	/// Outbound links.
	pub links: &'static [LinkRef],
	/// Logo file stem under `/images/logos`.
	pub logo_key: Option<&'static str>,
	/// Filter categories.
	pub cats: &'static [XpCategory],
}

impl Experience {
	const BLANK: Self = Self {
		id: "",
		title: "",
		org: "",
		start: None,
		end: None,
		dates_label: None,
		location: None,
		mode: None,
		summary: "",
		details: &[],
		skills: &[],
		links: &[],
		logo_key: None,
		cats: &[],
	};

	/// Year bucket: the first four characters of the start or date label.
	pub fn year(&self) -> Option<&'static str> {
		self.start
			.or(self.dates_label)
			.and_then(|s| s.get(..4))
			.filter(|y| !y.is_empty())
	}
}

/// All roles, newest first within each year.
pub static EXPERIENCE: &[Experience] = &[
	Experience {
		id: "synchrony-intern",
		title: "Technology Intern (BLP)",
		org: "Synchrony",
		start: Some("2025-06"),
		location: Some("Stamford, CT"),
		mode: Some(WorkMode::OnSite),
		summary: "Enterprise Architecture \u{b7} Incubation | Product.",
		details: &["Enterprise Architecture initiatives; incubation/product workstream."],
		logo_key: Some("synchrony"),
		cats: &[Internship, Systems, Product],
		..Experience::BLANK
	},
	Experience {
		id: "stvp-xfund",
		title: "XFund Ethics Fellow (formerly PEAK Fellows)",
		org: "Stanford Technology Ventures Program (STVP)",
		start: Some("2024-09"),
		location: Some("Stanford, CA"),
		mode: Some(WorkMode::Seasonal),
		summary: "2024 STVP XFund Ethics Fellow.",
		logo_key: Some("stvp"),
		cats: &[Fellowship, Leadership, Product],
		..Experience::BLANK
	},
	Experience {
		id: "journalismera-cofounder",
		title: "Co-Founder",
		org: "Journalismera",
		start: Some("2022-06"),
		location: Some("Santa Monica, CA"),
		mode: Some(WorkMode::SelfEmployed),
		summary: "Lead content strategy, production, and audience growth.",
		details: &[
			"Scaled to 300k+ views across YouTube/TikTok/Instagram.",
			"Built monetization pathways.",
		],
		logo_key: Some("journalismera"),
		cats: &[Leadership, Product],
		..Experience::BLANK
	},
	Experience {
		id: "mlt-fellow",
		title: "MLT Fellow",
		org: "Management Leadership for Tomorrow",
		start: Some("2024-12"),
		summary: "Leadership & career acceleration program.",
		logo_key: Some("mlt"),
		cats: &[Fellowship, Leadership],
		..Experience::BLANK
	},
	Experience {
		id: "curious-cardinals-mentor",
		title: "Mentor",
		org: "Curious Cardinals",
		start: Some("2025-03"),
		mode: Some(WorkMode::PartTime),
		summary: "Personalized learning in product strategy & tech skills.",
		details: &["Guided MVP development with structured pathways."],
		logo_key: Some("curious-cardinals"),
		cats: &[Leadership, Product],
		..Experience::BLANK
	},
	Experience {
		id: "sddl-ra",
		title: "Research Assistant (Meta Project)",
		org: "Stanford Deliberative Democracy Lab",
		start: Some("2023-06"),
		end: Some("2025-08"),
		location: Some("Stanford, CA"),
		summary: "Data analysis for Meta project.",
		skills: &["IBM SPSS Statistics", "Data Analysis"],
		logo_key: Some("stanford-ddl"),
		cats: &[Research, Data],
		..Experience::BLANK
	},
	Experience {
		id: "moss-lab-ra",
		title: "Research Assistant",
		org: "Stanford Medicine \u{2014} Moss Lab",
		start: Some("2024-08"),
		end: Some("2025-04"),
		mode: Some(WorkMode::Hybrid),
		summary: "Automated diagnosis of strabismus using deep learning.",
		skills: &["Python", "Deep Learning"],
		logo_key: Some("stanford-medicine"),
		cats: &[Research, AiMl, Data],
		..Experience::BLANK
	},
	Experience {
		id: "stanford-management-consultant",
		title: "Senior Consultant",
		org: "Stanford Management",
		start: Some("2024-01"),
		end: Some("2025-03"),
		summary: "Client projects in product/marketing strategy.",
		logo_key: Some("stanford-marketing"),
		cats: &[Product, Leadership],
		..Experience::BLANK
	},
	Experience {
		id: "google-pixel-studio",
		title: "Senior Consultant",
		org: "Google Pixel Studio",
		start: Some("2024-04"),
		end: Some("2024-06"),
		summary: "Short-term PM engagement.",
		logo_key: Some("google"),
		cats: &[Product],
		..Experience::BLANK
	},
	Experience {
		id: "lumiere-microsoft-consultant",
		title: "Consultant (Product Marketing)",
		org: "Microsoft (Imagine Cup)",
		start: Some("2024-01"),
		end: Some("2024-04"),
		summary: "Consulted on Imagine Cup product marketing and GTM.",
		skills: &["Product Marketing"],
		logo_key: Some("microsoft"),
		cats: &[Product],
		..Experience::BLANK
	},
	Experience {
		id: "lumiere-consultant",
		title: "Project Manager",
		org: "Lumiere Education",
		summary: "Consulted on student product strategy and go-to-market.",
		skills: &["Product Strategy", "GTM"],
		logo_key: Some("lumiere"),
		cats: &[Product],
		..Experience::BLANK
	},
	Experience {
		id: "demystifyd-pm-intern",
		title: "Founding Product Manager",
		org: "Demystifyd",
		start: Some("2024-02"),
		end: Some("2024-09"),
		location: Some("Dallas, TX (Remote)"),
		summary: "Built platform for foreign nationals (launched Jun 2024).",
		skills: &["Python", "Product Management"],
		links: &[LinkRef {
			label: "Website",
			href: "https://demystifyd.com",
		}],
		logo_key: Some("demystifyd"),
		cats: &[Internship, Product],
		..Experience::BLANK
	},
	Experience {
		id: "sura-src-codirector",
		title: "Stanford Research Conference Co-Director",
		org: "Stanford Undergraduate Research Association",
		start: Some("2023-10"),
		end: Some("2024-09"),
		location: Some("Stanford, CA"),
		mode: Some(WorkMode::Seasonal),
		summary: "Directed Stanford\u{2019}s largest undergrad research conference.",
		details: &["Programmed Nobel Laureate Thomas S\u{fc}dhof."],
		logo_key: Some("sura"),
		cats: &[Leadership],
		..Experience::BLANK
	},
	Experience {
		id: "stanford-health-pm",
		title: "Project Manager",
		org: "Stanford Healthcare Consulting Group",
		start: Some("2024-01"),
		end: Some("2024-03"),
		location: Some("Palo Alto, CA"),
		summary: "CAUTI strategy project.",
		logo_key: Some("stanford-health"),
		cats: &[Product, Systems],
		..Experience::BLANK
	},
	Experience {
		id: "joby-congress-associate",
		title: "Campaign Associate (CA-16)",
		org: "Joby For Congress",
		start: Some("2023-12"),
		end: Some("2024-03"),
		summary: "Field and comms support.",
		logo_key: Some("joby"),
		cats: &[Leadership],
		..Experience::BLANK
	},
	Experience {
		id: "adams-street-intern",
		title: "Growth Equity Investments Intern",
		org: "Adams Street Partners",
		start: Some("2023-06"),
		end: Some("2023-07"),
		location: Some("Menlo Park, CA"),
		mode: Some(WorkMode::Hybrid),
		summary: "Generative AI software research.",
		skills: &["Financial Analysis", "Data Analysis"],
		logo_key: Some("adams_street_partners_logo"),
		cats: &[Internship, Data],
		..Experience::BLANK
	},
];

/// Roles in `category`, or all of them for `None`.
pub fn filter_experience(items: &[Experience], category: Option<XpCategory>) -> Vec<&Experience> {
	items
		.iter()
		.filter(|it| category.is_none_or(|c| it.cats.contains(&c)))
		.collect()
}

/// Roles sharing a year label.
#[derive(Clone, Debug, PartialEq)]
pub struct YearGroup<'a> {
	/// Four-digit year, or `Other`.
	pub label: String,
	/// Roles in declaration order.
	pub items: Vec<&'a Experience>,
}

/// Groups roles by year, newest year first and `Other` last.
pub fn group_by_year<'a>(items: &[&'a Experience]) -> Vec<YearGroup<'a>> {
	let mut groups: Vec<YearGroup<'a>> = Vec::new();
	for &it in items {
		let label = it.year().unwrap_or("Other");
		match groups.iter_mut().find(|g| g.label == label) {
			Some(g) => g.items.push(it),
			None => groups.push(YearGroup {
				label: label.to_string(),
				items: vec![it],
			}),
		}
	}
	groups.sort_by_key(|g| std::cmp::Reverse(g.label.parse::<i32>().unwrap_or(i32::MIN)));
	groups
}

/// Role with `id`.
pub fn find_experience(id: &str) -> Option<&'static Experience> {
	EXPERIENCE.iter().find(|e| e.id == id)
}
