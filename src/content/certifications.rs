//! Certifications and courses.

use CertTag::*;

use super::dates::format_month_year;
use super::text::{first_sentence, split_key_skills, typeset_dashes};

/// Certification topic, one subway line each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CertTag {
	/// Deep learning.
	DeepLearning,
	/// Classical machine learning.
	ClassicalMl,
	/// Reinforcement learning.
	ReinforcementLearning,
	/// Hyperparameter tuning.
	HyperparameterTuning,
	/// Product.
	Product,
	/// Agile.
	Agile,
	/// Compliance.
	Compliance,
}

/// Route bullet drawn on a filter tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
	/// Single glyph.
	pub glyph: &'static str,
	/// Fill color.
	pub bg: &'static str,
	/// Glyph color.
	pub fg: &'static str,
}

impl CertTag {
	/// Every tag, in tab order.
	pub const ALL: [CertTag; 7] = [
		Self::DeepLearning,
		Self::ClassicalMl,
		Self::ReinforcementLearning,
		Self::HyperparameterTuning,
		Self::Product,
		Self::Agile,
		Self::Compliance,
	];

	/// Tab label.
	pub fn label(self) -> &'static str {
		match self {
			Self::DeepLearning => "Deep Learning",
			Self::ClassicalMl => "Classical ML",
			Self::ReinforcementLearning => "Reinforcement Learning",
			Self::HyperparameterTuning => "Hyperparameter Tuning",
			Self::Product => "Product",
			Self::Agile => "Agile",
			Self::Compliance => "Compliance",
		}
	}

	/// Lowercase letters of the label, for CSS classes.
	pub fn class_name(self) -> String {
		self.label()
			.chars()
			.filter(char::is_ascii_alphabetic)
			.map(|c| c.to_ascii_lowercase())
			.collect()
	}

	/// Tab bullet.
	pub fn bullet(self) -> Bullet {
		let (glyph, bg, fg) = match self {
			Self::DeepLearning => ("D", "#0039A6", "#fff"),
			Self::ClassicalMl => ("C", "#B933AD", "#fff"),
			Self::ReinforcementLearning => ("R", "#EE352E", "#fff"),
			Self::HyperparameterTuning => ("H", "#00A65C", "#fff"),
			Self::Product => ("N", "#FCCC0A", "#111"),
			Self::Agile => ("F", "#FF6319", "#fff"),
			Self::Compliance => ("6", "#00933C", "#fff"),
		};
		Bullet { glyph, bg, fg }
	}
}

/// Bullet of the unfiltered tab.
pub const ALL_BULLET: Bullet = Bullet {
	glyph: "L",
	bg: "#A7A9AC",
	fg: "#111",
};

/// Whether the record is a formal certification or a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertSource {
	/// Formal certification.
	Certification,
	/// Completed course.
	Course,
}

/// One certification card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
	/// Stable id.
	pub id: &'static str,
	/// Title.
	pub title: &'static str,
	/// Issuing body.
	pub issuer: &'static str,
	/// `YYYY-MM`.
	pub issued: &'static str,
	/// `YYYY-MM`.
	pub expires: Option<&'static str>,
	/// Verification link.
	pub credential_url: Option<&'static str>,
	/// One-line context.
	pub context: &'static str,
	/// Longer description, optionally ending in `Key Skills Built:`.
	pub long: Option<&'static str>,
	/// Logo file stem.
	pub logo_key: Option<&'static str>,
	/// Topic tags; the first picks the card accent.
	pub tags: &'static [CertTag],
	/// Certification or course.
	pub source: CertSource,
}

/// Card text derived from a certification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertCard {
	/// Typeset title.
	pub title: String,
	/// Typeset first sentence of the body.
	pub front: String,
	/// Key skill chips.
	pub skills: Vec<String>,
	/// `Mon YYYY` of issue.
	pub issued: Option<String>,
}

impl Certification {
	/// Text for the front of the card.
	pub fn card(&self) -> CertCard {
		let text = self.long.unwrap_or(self.context);
		let split = split_key_skills(text);
		CertCard {
			title: typeset_dashes(self.title),
			front: typeset_dashes(first_sentence(&split.body)),
			skills: split.skills,
			issued: format_month_year(self.issued),
		}
	}

	/// Accent class from the first tag.
	pub fn accent(&self) -> String {
		self.tags.first().map_or_else(|| "misc".to_string(), |t| t.class_name())
	}
}

/// Every certification, including hidden ones.
pub static CERTIFICATIONS: &[Certification] = &[
	Certification {
		id: "safe-ssm-6",
		title: "Certified SAFe\u{ae} 6 Scrum Master",
		issuer: "Scaled Agile, Inc.",
		issued: "2025-06",
		expires: Some("2026-06"),
		credential_url: None,
		context: "Validated ability to run Scrum at scale: PI planning, iteration execution, and impediment removal in regulated teams.",
		long: Some("Completed SAFe 6 training while working on an Enterprise Architecture team in an agile environment. Took part in PI Planning, stand-ups, and iteration ceremonies, and kept Jira boards aligned with ART objectives.\n\nKey Skills Built: Agile frameworks (Scrum, Kanban, SAFe), enterprise collaboration, Jira backlog management, program increment planning, cross-team coordination, architecture alignment"),
		logo_key: Some("scaled-agile"),
		tags: &[Agile],
		source: CertSource::Certification,
	},
	Certification {
		id: "leland-pm-bootcamp",
		title: "Product Management Bootcamp",
		issuer: "Leland",
		issued: "2025-03",
		expires: None,
		credential_url: None,
		context: "Intensive on product sense, execution, and PM interview frameworks.",
		long: Some("Worked through product sense, metrics, and execution cases with coaches from top product teams. Practiced structured answers for design, strategy, and estimation questions.\n\nKey Skills Built: product sense, metric design, prioritization, roadmapping, interview frameworks"),
		logo_key: Some("leland"),
		tags: &[Product],
		source: CertSource::Course,
	},
	Certification {
		id: "dlai-cnn",
		title: "Convolutional Neural Networks",
		issuer: "DeepLearning.AI",
		issued: "2024-11",
		expires: None,
		credential_url: None,
		context: "Convolutions, residual networks, detection, and neural style transfer.",
		long: Some("Built convolutional networks from scratch and with frameworks, then applied them to detection, segmentation, and face recognition. Covered ResNets, MobileNet, YOLO, and U-Net.\n\nKey Skills Built: CNN architectures, transfer learning, object detection, image segmentation, face recognition"),
		logo_key: Some("deeplearningai"),
		tags: &[DeepLearning],
		source: CertSource::Course,
	},
	Certification {
		id: "dlai-improving-dnn",
		title: "Improving Deep Neural Networks",
		issuer: "DeepLearning.AI",
		issued: "2024-10",
		expires: None,
		credential_url: None,
		context: "Regularization, optimization, and hyperparameter tuning for deep networks.",
		long: Some("Practiced initialization, regularization, and dropout, then compared momentum, RMSprop, and Adam. Tuned hyperparameters systematically and used batch normalization.\n\nKey Skills Built: regularization, optimization algorithms, hyperparameter search, batch normalization, TensorFlow"),
		logo_key: Some("deeplearningai"),
		tags: &[DeepLearning, HyperparameterTuning],
		source: CertSource::Course,
	},
	Certification {
		id: "dlai-nndl",
		title: "Neural Networks and Deep Learning",
		issuer: "DeepLearning.AI",
		issued: "2024-10",
		expires: None,
		credential_url: None,
		context: "Foundations of neural networks, vectorization, and backpropagation.",
		long: Some("Implemented shallow and deep networks with vectorized forward and backward propagation. Built intuition for activations, loss surfaces, and parameter shapes.\n\nKey Skills Built: backpropagation, vectorization, deep network design, NumPy"),
		logo_key: Some("deeplearningai"),
		tags: &[DeepLearning],
		source: CertSource::Course,
	},
	Certification {
		id: "dlai-structuring-ml",
		title: "Structuring Machine Learning Projects",
		issuer: "DeepLearning.AI",
		issued: "2024-10",
		expires: None,
		credential_url: None,
		context: "Error analysis and data-vs-model prioritization framework to iterate ML systems effectively.",
		long: Some("Learned to diagnose failure modes and prioritize fixes across data, labels, and model. Designed dev/test splits for shifting distributions and reasoned about avoidable bias with human-level performance.\n\nKey Skills Built: ML diagnostics, error analysis, data splitting, bias\u{2013}variance analysis, transfer learning, multi-task learning, end-to-end ML frameworks"),
		logo_key: Some("deeplearningai"),
		tags: &[ClassicalMl, Product],
		source: CertSource::Course,
	},
];

/// Certifications shown on the page, newest first, optionally filtered by tag.
pub fn visible_certifications(tag: Option<CertTag>) -> Vec<&'static Certification> {
	let mut out: Vec<&Certification> = CERTIFICATIONS
		.iter()
		.filter(|c| c.issuer != "LinkedIn")
		.filter(|c| tag.is_none_or(|t| c.tags.contains(&t)))
		.collect();
	out.sort_by(|a, b| b.issued.cmp(a.issued));
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sorted_newest_first() {
		let all = visible_certifications(None);
		assert_eq!(all.len(), CERTIFICATIONS.len());
		assert!(all.windows(2).all(|w| w[0].issued >= w[1].issued));
		assert_eq!(all[0].id, "safe-ssm-6");
	}

	#[test]
	fn filters_by_tag() {
		let dl = visible_certifications(Some(DeepLearning));
		assert_eq!(dl.len(), 3);
		assert!(visible_certifications(Some(Compliance)).is_empty());
	}

	#[test]
	fn card_text() {
		let card = CERTIFICATIONS[0].card();
		assert_eq!(card.front, "Completed SAFe 6 training while working on an Enterprise Architecture team in an agile environment.");
		assert_eq!(card.skills.len(), 8);
		assert_eq!(card.issued.as_deref(), Some("Jun 2025"));
		assert_eq!(CERTIFICATIONS[0].accent(), "agile");
		assert_eq!(HyperparameterTuning.class_name(), "hyperparametertuning");
	}
}
