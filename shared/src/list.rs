//! Row descriptions and growth rules for the repeating settings lists.
//!
//! A list is an ordered sequence of rows, each holding one text value. The
//! rules: editing the last row to a non-empty value appends exactly one blank
//! row, unless the preceding row is still blank; any row can be removed.
//! `ListModel` applies the same transitions the DOM layer performs, so the
//! behavior is testable without a browser.

/// Array-marker suffix on repeated input field names (`from[]`, `to[]`, ...).
const ARRAY_SUFFIX: &str = "[]";

/// First character uppercased, rest unchanged. Empty input stays empty.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Typed description of one list row, derived from a field name.
///
/// New rows are constructed from this description instead of markup strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSpec {
    field: String,
}

impl RowSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Derive the spec from an input's `name` attribute, stripping the
    /// trailing `[]` array marker if present.
    pub fn from_input_name(name: &str) -> Self {
        Self::new(name.strip_suffix(ARRAY_SUFFIX).unwrap_or(name))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// `name` attribute for the row's input.
    pub fn input_name(&self) -> String {
        format!("{}{ARRAY_SUFFIX}", self.field)
    }

    /// Placeholder text: the field name with its first character capitalized.
    pub fn placeholder(&self) -> String {
        capitalize(&self.field)
    }
}

/// Whether editing the last row of a list should append a new blank row.
///
/// `previous_value` is the value of the row just before the edited one.
/// `None` means there is no previous row, or the previous row carries no
/// readable input; both permit growth.
pub fn should_grow(previous_value: Option<&str>, edited_value: &str) -> bool {
    previous_value.map_or(true, |previous| !previous.is_empty()) && !edited_value.is_empty()
}

/// Pure mirror of one DOM list: row values in order, plus the field name.
#[derive(Clone, Debug)]
pub struct ListModel {
    spec: RowSpec,
    rows: Vec<String>,
}

impl ListModel {
    /// A list holding only the trailing blank row.
    pub fn new(spec: RowSpec) -> Self {
        Self::with_values(spec, &[])
    }

    /// A list seeded with existing values plus the trailing blank row.
    pub fn with_values(spec: RowSpec, values: &[String]) -> Self {
        let mut rows = values.to_vec();
        rows.push(String::new());
        Self { spec, rows }
    }

    pub fn spec(&self) -> &RowSpec {
        &self.spec
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply a keystroke: set row `index` to `value`, appending a blank row
    /// when the growth preconditions hold. Returns the spec the appended row
    /// was built from, if any.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> Option<RowSpec> {
        let row = self.rows.get_mut(index)?;
        *row = value.into();

        let is_last = index + 1 == self.rows.len();
        let previous_value = index.checked_sub(1).map(|i| self.rows[i].as_str());
        if is_last && should_grow(previous_value, &self.rows[index]) {
            self.rows.push(String::new());
            return Some(self.spec.clone());
        }
        None
    }

    /// Remove row `index`. Returns the removed value.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Non-blank row values, in order.
    pub fn values(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| !row.is_empty())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("from"), "From");
        assert_eq!(capitalize("to"), "To");
        assert_eq!(capitalize("blacklist"), "Blacklist");
    }

    #[test]
    fn capitalize_empty_stays_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn row_spec_strips_array_suffix() {
        let spec = RowSpec::from_input_name("from[]");
        assert_eq!(spec.field(), "from");
        assert_eq!(spec.input_name(), "from[]");
        assert_eq!(spec.placeholder(), "From");
    }

    #[test]
    fn row_spec_keeps_plain_names() {
        let spec = RowSpec::from_input_name("blacklist");
        assert_eq!(spec.field(), "blacklist");
        assert_eq!(spec.input_name(), "blacklist[]");
    }

    #[test]
    fn grows_on_last_row_edit() {
        let mut list = ListModel::new(RowSpec::new("from"));
        assert_eq!(list.len(), 1);

        let appended = list.edit(0, "a");
        assert!(matches!(appended, Some(spec) if spec.field() == "from"));
        assert_eq!(list.rows(), ["a", ""]);
    }

    #[test]
    fn repeated_keystrokes_grow_once() {
        let mut list = ListModel::new(RowSpec::new("from"));
        assert!(list.edit(0, "a").is_some());
        // The edited row is no longer last, so further keystrokes are inert.
        assert!(list.edit(0, "ab").is_none());
        assert!(list.edit(0, "abc").is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn interior_edit_never_grows() {
        let values = ["x".to_string(), "y".to_string()];
        let mut list = ListModel::with_values(RowSpec::new("to"), &values);
        assert_eq!(list.len(), 3);

        assert!(list.edit(0, "edited").is_none());
        assert!(list.edit(1, "also edited").is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn blank_predecessor_blocks_growth() {
        let mut list = ListModel::new(RowSpec::new("blacklist"));
        list.edit(0, "spam@example.com");
        list.edit(0, "");
        assert!(list.edit(1, "other@example.com").is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn clearing_the_last_row_does_not_grow() {
        let mut list = ListModel::new(RowSpec::new("from"));
        assert!(list.edit(0, "").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_deletes_exactly_one_row() {
        let values = ["a".to_string(), "b".to_string()];
        let mut list = ListModel::with_values(RowSpec::new("from"), &values);
        assert_eq!(list.remove(1), Some("b".into()));
        assert_eq!(list.rows(), ["a", ""]);
        assert_eq!(list.remove(5), None);
    }

    #[test]
    fn typing_then_removing_the_first_row() {
        // One blank "from" row; type "a"; a blank row appears; remove row 1.
        let mut list = ListModel::new(RowSpec::new("from"));
        let appended = list.edit(0, "a").expect("list should grow");
        assert_eq!(appended.input_name(), "from[]");
        assert_eq!(appended.placeholder(), "From");
        assert_eq!(list.rows(), ["a", ""]);

        list.remove(0);
        assert_eq!(list.rows(), [""]);
    }

    #[test]
    fn at_most_one_trailing_blank() {
        let mut list = ListModel::new(RowSpec::new("to"));
        list.edit(0, "first");
        list.edit(1, "second");
        list.edit(2, "third");
        assert_eq!(list.rows().iter().filter(|row| row.is_empty()).count(), 1);
        assert!(list.rows().last().is_some_and(|row| row.is_empty()));
        assert_eq!(list.values(), ["first", "second", "third"]);
    }
}
