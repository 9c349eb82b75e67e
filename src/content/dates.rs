//! `YYYY-MM` labels for experience and certification records.

use chrono::{Datelike, NaiveDate};

/// First day of the month named by `YYYY-MM` (extra text after the month is ignored).
pub fn parse_year_month(ym: &str) -> Option<NaiveDate> {
	let mut parts = ym.splitn(3, '-');
	let year: i32 = parts.next()?.trim().parse().ok()?;
	let month: u32 = parts.next()?.trim().parse().ok()?;
	if year == 0 {
		return None;
	}
	NaiveDate::from_ymd_opt(year, month, 1)
}

/// `"2025-06"` as `"Jun 2025"`.
pub fn format_month_year(ym: &str) -> Option<String> {
	parse_year_month(ym).map(|d| d.format("%b %Y").to_string())
}

/// Whole months from `start` to `end`, never negative.
fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
	let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
	months.max(0) as u32
}

/// Tenure label such as `"1 yr 2 mos"`; `end` of `None` means still ongoing as of `today`.
pub fn tenure(start: &str, end: Option<&str>, today: NaiveDate) -> Option<String> {
	let from = parse_year_month(start)?;
	let to = match end {
		Some(e) => parse_year_month(e)?,
		None => today,
	};
	let months = months_between(from, to);
	let (years, rem) = (months / 12, months % 12);

	let mut parts = Vec::new();
	if years > 0 {
		parts.push(format!("{years} yr{}", if years > 1 { "s" } else { "" }));
	}
	if rem > 0 {
		parts.push(format!("{rem} mo{}", if rem > 1 { "s" } else { "" }));
	}
	if parts.is_empty() {
		return Some("0 mos".into());
	}
	Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn day(y: i32, m: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, 1).unwrap()
	}

	#[test]
	fn month_year_labels() {
		assert_eq!(format_month_year("2025-06").as_deref(), Some("Jun 2025"));
		assert_eq!(format_month_year("2024-12-01").as_deref(), Some("Dec 2024"));
		assert_eq!(format_month_year("2025"), None);
		assert_eq!(format_month_year("2025-13"), None);
		assert_eq!(format_month_year(""), None);
	}

	#[test]
	fn tenure_labels() {
		let today = day(2025, 10);
		assert_eq!(tenure("2024-08", Some("2025-04"), today).as_deref(), Some("8 mos"));
		assert_eq!(tenure("2023-06", Some("2024-08"), today).as_deref(), Some("1 yr 2 mos"));
		assert_eq!(tenure("2022-06", None, today).as_deref(), Some("3 yrs 4 mos"));
		assert_eq!(tenure("2025-06", Some("2025-06"), today).as_deref(), Some("0 mos"));
		assert_eq!(tenure("2025-06", Some("2024-01"), today).as_deref(), Some("0 mos"));
		assert_eq!(tenure("bad", None, today), None);
	}
}
