use idgen_core::generation::GenerationReport;

/// One id per line.
pub fn lines(ids: &[String]) -> String {
	let mut out = String::new();
	for id in ids {
		out.push_str(id);
		out.push('\n');
	}
	out
}

/// Number of columns that fit in `width`, sized after the first id.
pub fn column_count(ids: &[String], width: usize) -> usize {
	let id_width = ids.first().map_or(0, |id| id.chars().count());
	(width / (id_width + 1)).max(1)
}

/// Ids laid out in rows of `column_count` entries separated by a space.
pub fn columns(ids: &[String], width: usize) -> String {
	let mut out = String::new();
	for row in ids.chunks(column_count(ids, width)) {
		out.push_str(&row.join(" "));
		out.push('\n');
	}
	out
}

pub fn json(report: &GenerationReport) -> Result<String, serde_json::Error> {
	serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
	use super::*;
	use idgen_core::generation::Fulfillment;
	use rstest::rstest;

	fn ids(values: &[&str]) -> Vec<String> {
		values.iter().map(|s| s.to_string()).collect()
	}

	#[rstest]
	fn one_id_per_line() {
		assert_eq!(lines(&ids(&["ab", "cd"])), "ab\ncd\n");
		assert_eq!(lines(&[]), "");
	}

	#[rstest]
	#[case(80, 4, 16)]
	#[case(10, 4, 2)]
	#[case(4, 4, 1)]
	#[case(0, 4, 1)]
	fn columns_fit_the_width(#[case] width: usize, #[case] id_width: usize, #[case] expected: usize) {
		let id = "x".repeat(id_width);
		assert_eq!(column_count(&[id], width), expected);
	}

	#[rstest]
	fn rows_are_filled_in_order() {
		let ids = ids(&["aaaa", "bbbb", "cccc", "dddd", "eeee"]);
		assert_eq!(columns(&ids, 10), "aaaa bbbb\ncccc dddd\neeee\n");
		assert_eq!(columns(&ids, 25), "aaaa bbbb cccc dddd eeee\n");
	}

	#[rstest]
	fn no_ids_no_rows() {
		assert_eq!(columns(&[], 80), "");
	}

	#[rstest]
	fn report_as_json() {
		let report = GenerationReport {
			ids: ids(&["u00"]),
			attempts: 2,
			target_count: 3,
			fulfillment: Fulfillment::Partial,
		};
		let value: serde_json::Value = serde_json::from_str(&json(&report).unwrap()).unwrap();
		assert_eq!(value["ids"][0], "u00");
		assert_eq!(value["attempts"], 2);
		assert_eq!(value["fulfillment"], "partial");
	}
}
