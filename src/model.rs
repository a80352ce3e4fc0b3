//! Record types and the fixed list of states.

use serde::{Deserialize, Deserializer, Serialize};

/// States aggregated by the tool, in output order.
pub const STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Textual markers read as a missing value.
const NULL_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Row of the input dataset.
///
/// Columns other than `State` and `Value` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "State")]
    pub state: String,

    /// Absent when the cell is empty, missing from a short row, or holds a null marker.
    #[serde(rename = "Value", default, deserialize_with = "deserialize_value")]
    pub value: Option<f64>,
}

/// Mean value of a single state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "State")]
    pub state: String,

    #[serde(rename = "Value")]
    pub value: f64,
}

fn deserialize_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(field) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_value(&field).map_err(serde::de::Error::custom)
}

fn parse_value(field: &str) -> Result<Option<f64>, String> {
    let field = field.trim();
    if field.is_empty() || NULL_MARKERS.contains(&field) {
        return Ok(None);
    }
    let value: f64 = field
        .parse()
        .map_err(|_| format!("value must be a number, but is {field:?}"))?;
    if value.is_nan() {
        return Ok(None);
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_list_is_sorted_and_unique() {
        assert!(STATES.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(STATES.first(), Some(&"Alabama"));
        assert_eq!(STATES.last(), Some(&"Wyoming"));
        assert!(!STATES.contains(&"District of Columbia"));
    }

    #[test]
    fn parse_value_handles_null_markers() {
        assert_eq!(parse_value(""), Ok(None));
        assert_eq!(parse_value("   "), Ok(None));
        assert_eq!(parse_value("NA"), Ok(None));
        assert_eq!(parse_value("NaN"), Ok(None));
        for marker in [
            "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN", "<NA>", "None",
        ] {
            assert_eq!(parse_value(marker), Ok(None), "marker {marker:?}");
        }
        assert_eq!(parse_value(" 12.5 "), Ok(Some(12.5)));
        assert_eq!(parse_value("-3"), Ok(Some(-3.0)));
        assert_eq!(parse_value("1e2"), Ok(Some(100.0)));
        assert!(parse_value("twelve").is_err());
    }
}
