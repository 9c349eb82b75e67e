//! Project write-ups for the projects grid.

use super::assets::{PLACEHOLDER_COVER, cover_candidates};
use super::text::{KeySkills, first_paragraph, split_key_skills};

/// Where a project's cover image comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cover {
	/// File stem under `/images/projects`, tried with each image extension.
	Key(&'static str),
	/// A fixed asset URL.
	Asset(&'static str),
	/// Use the project id as the file stem.
	FromId,
}

/// Link chip under a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attachment {
	/// Button text.
	pub label: &'static str,
	/// Target URL.
	pub href: &'static str,
}

/// A project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
	/// Slug used in `#project=` links.
	pub id: &'static str,
	/// Card title.
	pub title: &'static str,
	/// Organization, if any.
	pub org: Option<&'static str>,
	/// Date text, if any.
	pub dates: Option<&'static str>,
	/// Cover source.
	pub cover: Cover,
	/// Fit the whole cover instead of cropping it.
	pub contain_cover: bool,
	/// Short teaser.
	pub snippet: &'static str,
	/// Full text, optionally ending with a `Key Skills Built:` list.
	pub description: &'static str,
	/// Outbound links.
	pub attachments: &'static [Attachment],
}

impl Project {
	/// Cover URLs to try in order.
	pub fn cover_candidates(&self) -> Vec<String> {
		match self.cover {
			Cover::Key(key) => cover_candidates(Some(key)),
			Cover::FromId => cover_candidates(Some(self.id)),
			Cover::Asset(url) => vec![url.to_string(), PLACEHOLDER_COVER.to_string()],
		}
	}

	/// Description body and its key-skill chips.
	pub fn key_skills(&self) -> KeySkills {
		split_key_skills(self.description)
	}

	/// Front-of-card text: the first paragraph, else the snippet.
	pub fn teaser(&self) -> String {
		let body = self.key_skills().body;
		let first = first_paragraph(&body).trim();
		if first.is_empty() { self.snippet.to_string() } else { first.to_string() }
	}

	/// `org • dates` subtitle, skipping missing parts.
	pub fn subtitle(&self) -> String {
		match (self.org, self.dates) {
			(Some(o), Some(d)) => format!("{o} \u{2022} {d}"),
			(Some(o), None) => o.to_string(),
			(None, Some(d)) => d.to_string(),
			(None, None) => String::new(),
		}
	}
}

const BLANK: Project = Project {
	id: "",
	title: "",
	org: None,
	dates: None,
	cover: Cover::FromId,
	contain_cover: false,
	snippet: "",
	description: "",
	attachments: &[],
};

const fn link(label: &'static str, href: &'static str) -> Attachment {
	Attachment { label, href }
}

/// Every project, in display order.
pub static PROJECTS: &[Project] = &[
	Project {
		id: "synced-in",
		title: "Synced-In",
		cover: Cover::Key("SYNCEDIN"),
		contain_cover: true,
		snippet: "AI-powered internal expert search with natural-language queries and RAG over JSON datasets.",
		description: "Built Synced-In, an internal tool that lets anyone in the organization search in natural language for subject matter experts. Designed a retrieval-augmented architecture on Flask and JSON datasets with keyword extraction and semantic ranking, plus a modular backend for query handling, LLM integration, and top-match highlighting. Pitched to more than 190 members of the technology and operations teams and finished in the top 10 of 140+ teams.\n\nKey Skills Built: Retrieval-augmented generation (RAG), semantic search, Flask (API development), keyword extraction, embedding-based retrieval, scalable backend architecture",
		attachments: &[link("GitHub", "https://github.com/pcd15/Synced-In")],
		..BLANK
	},
	Project {
		id: "soc2-rag",
		title: "SOC 2 Evidence Extraction RAG",
		cover: Cover::Asset("/images/projects/soc2-paperwork.jpg"),
		snippet: "RAG system to automate evidence extraction from SOC 2 compliance reports.",
		description: "Built a retrieval-augmented generation system that automates evidence extraction from SOC 2 compliance reports. The pipeline parses text-native and scanned PDFs, embeds chunked passages, and retrieves top-k evidence to ground LLM answers for audit workflows.\n\nKey Skills Built: Retrieval-augmented generation (RAG), PDF parsing + OCR, embeddings, FAISS vector search, grounding + prompt design, audit/compliance tooling",
		attachments: &[link("GitHub", "https://github.com/MatthewTorre/Technology_Assessment_Optimization")],
		..BLANK
	},
	Project {
		id: "quantum-x-ai",
		title: "Independent Research: Quantum Computing \u{d7} AI \u{2014} Theory & Applications",
		snippet: "Survey + framework for QC/AI synergy: Grover, Shor, quantum k-Means, quantum kernels, and research directions.",
		description: "Developed a framework uniting quantum algorithms with classical and modern AI, focused on high-impact use cases in finance. Worked through Grover's and Shor's algorithms, quantum k-Means clustering, quantum kernel methods, and QAOA, ending in a roadmap for quantum-enhanced AI.\n\nKey Skills Built: quantum kernels, QML framing, complexity intuition, limits & feasibility, Post Quantum Cryptography (PCQ), ",
		..BLANK
	},
	Project {
		id: "mars-classifier",
		title: "Mars Surface Image Classifier",
		cover: Cover::Key("MARS"),
		snippet: "VGG-16 + SIFT/ORB for Curiosity Rover images; robust preprocessing and augmentation.",
		description: "Built an end-to-end pipeline for Curiosity Rover imagery: preprocessing, augmentation, SIFT and ORB features fused into CNN inputs, and a fine-tuned VGG-16 with a custom 25-class head. Evaluated with confusion matrices and class-wise error analysis.\n\nKey Skills Built:  CNNs, feature extraction, vision preprocessing, augmentation, evaluation.",
		..BLANK
	},
	Project {
		id: "prodprepai",
		title: "ProdPrepAI",
		cover: Cover::Key("INTERVIEW"),
		snippet: "AI tool to help aspiring PMs prepare for interviews.",
		description: "Co-developed a product management interview coach combining BERT-based multi-label scoring with a Deep Q-Network agent that adapts feedback in real time. Trained with PyTorch, Hugging Face Transformers, and Stable-Baselines3.\n\nKey Skills Built: NLP pipelines, prompt/UX design, scoring rubrics, lightweight serving.",
		..BLANK
	},
	Project {
		id: "ezrecruit",
		title: "EzRecruit \u{2014} MVP & Product Review",
		cover: Cover::Key("EZRECRUIT"),
		snippet: "Proactive recruitment platform for varsity coaches.",
		description: "Designed a recruitment management platform for coaches from discovery through strategy, design, and financial modeling: 25+ coach interviews, market sizing, a 12-competitor benchmark, 45+ UI flow screens, and a subscription model with a 3.2x LTV to CAC ratio.\n\nKey Skills Built:  product discovery, PRDs, workflow design, KPI definition, stakeholder testing.",
		attachments: &[link(
			"Slidedeck",
			"https://docs.google.com/presentation/d/1vw-bSd_MeicdB-DcdcqvNBCdJaU1Mp7Sae0AFPi74Sk/edit?usp=sharing",
		)],
		..BLANK
	},
	Project {
		id: "ufc-outcomes",
		title: "Predicting UFC Fight Outcomes",
		cover: Cover::Key("MMA"),
		snippet: "Kaggle dataset\u{2026} 66.4% acc, 71.4% precision.",
		description: "Predicted outcomes of 4,896 UFC fights from 119 features with logistic regression and feed-forward networks, reaching 66.4% accuracy and 71.4% precision, then compared regularized and unregularized models through error analysis.\n\nKey Skills Built:  Logistic Regression, Neural Networks (PyTorch), Dropout Regularization, Cross-Entropy Loss, Stochastic Gradient Descent, Feature Engineering, Error Analysis, Model Evaluation, Sports Analytics, Product-Oriented ML Framing",
		attachments: &[link("Code", "https://github.com/austin-salcedo/CS221-UFC-Project")],
		..BLANK
	},
	Project {
		id: "qaoa-tsp",
		title: "Quantum Optimization and the Traveling Salesman Problem",
		cover: Cover::Key("NETWORK"),
		snippet: "Applied QAOA to TSP with Cirq; N=4/8/15.",
		description: "Applied the Quantum Approximate Optimization Algorithm to 4, 8, and 15 city instances of the Traveling Salesman Problem, encoding constraints into cost and mixer Hamiltonians with Cirq and tuning circuit parameters over 1,000 repetitions per circuit.\n\nKey Skills Built: QAOA, variational circuits, problem encoding, visualization, benchmarking.",
		attachments: &[link(
			"Code",
			"https://github.com/MatthewTorre/Quantum-Approximate-Optimization-Algorithm-As-Applied-to-Traveling-Salesman-Problem/blob/main/physics_14n_qaoa_demo_for_solving_tsp.py",
		)],
		..BLANK
	},
	Project {
		id: "world-football-ml",
		title: "World Football and Machine Learning",
		cover: Cover::Key("FOOTBALL"),
		snippet: "Ranking 2021\u{2013}2022 players with logistic regression and KPIs.",
		description: "Built a logistic regression pipeline over an 876-player dataset to rank the top performers of the 2021\u{2013}2022 season, reaching 94% accuracy with no false positives for top performers.\n\nKey Skills Built: Logistic regression, predictive analytics, feature engineering, model evaluation (classification reports, confusion matrices), train-test split design, precision-recall analysis",
		attachments: &[link(
			"Code",
			"https://github.com/MatthewTorre/Selecting-the-Best-Players-in-the-World-Football",
		)],
		..BLANK
	},
];

/// Project with `id`.
pub fn find_project(id: &str) -> Option<&'static Project> {
	PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn covers_resolve_per_source() {
		let mars = find_project("mars-classifier").unwrap();
		assert_eq!(mars.cover_candidates()[0], "/images/projects/MARS.webp");

		let inferred = find_project("quantum-x-ai").unwrap();
		assert_eq!(inferred.cover_candidates()[0], "/images/projects/quantum-x-ai.webp");

		let fixed = find_project("soc2-rag").unwrap().cover_candidates();
		assert_eq!(fixed.len(), 2);
		assert_eq!(fixed.last().map(String::as_str), Some(PLACEHOLDER_COVER));
	}

	#[test]
	fn every_cover_chain_ends_on_placeholder() {
		for p in PROJECTS {
			assert_eq!(p.cover_candidates().last().map(String::as_str), Some(PLACEHOLDER_COVER), "{}", p.id);
		}
	}

	#[test]
	fn key_skills_and_teaser() {
		let p = find_project("quantum-x-ai").unwrap();
		let split = p.key_skills();
		assert_eq!(split.skills.len(), 5);
		assert!(!p.teaser().contains("Key Skills"));
		assert_eq!(p.subtitle(), "");
	}
}
