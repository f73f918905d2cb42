//! US state reference table (50 states plus the District of Columbia).

/// State codes and full names, in the order the state selector lists them
pub const STATES: [(&str, &str); 51] = [
    ("NJ", "New Jersey"),
    ("IL", "Illinois"),
    ("NY", "New York"),
    ("CA", "California"),
    ("PA", "Pennsylvania"),
    ("WI", "Wisconsin"),
    ("WA", "Washington"),
    ("NC", "North Carolina"),
    ("OH", "Ohio"),
    ("GA", "Georgia"),
    ("KY", "Kentucky"),
    ("FL", "Florida"),
    ("MD", "Maryland"),
    ("TX", "Texas"),
    ("VA", "Virginia"),
    ("MI", "Michigan"),
    ("SD", "South Dakota"),
    ("IN", "Indiana"),
    ("NE", "Nebraska"),
    ("MO", "Missouri"),
    ("MA", "Massachusetts"),
    ("TN", "Tennessee"),
    ("LA", "Louisiana"),
    ("DC", "District of Columbia"),
    ("AR", "Arkansas"),
    ("OK", "Oklahoma"),
    ("UT", "Utah"),
    ("MN", "Minnesota"),
    ("AZ", "Arizona"),
    ("CT", "Connecticut"),
    ("RI", "Rhode Island"),
    ("ME", "Maine"),
    ("NH", "New Hampshire"),
    ("CO", "Colorado"),
    ("AL", "Alabama"),
    ("KS", "Kansas"),
    ("ID", "Idaho"),
    ("HI", "Hawaii"),
    ("OR", "Oregon"),
    ("NV", "Nevada"),
    ("NM", "New Mexico"),
    ("VT", "Vermont"),
    ("IA", "Iowa"),
    ("SC", "South Carolina"),
    ("DE", "Delaware"),
    ("ND", "North Dakota"),
    ("MS", "Mississippi"),
    ("WY", "Wyoming"),
    ("MT", "Montana"),
    ("AK", "Alaska"),
    ("WV", "West Virginia"),
];

/// Full name for a state code, if the code is in the reference set
#[must_use]
pub fn state_name(code: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Whether a code participates in geographic aggregation
#[must_use]
pub fn is_reference_state(code: &str) -> bool {
    state_name(code).is_some()
}

/// Iterate over state codes in selector order
pub fn state_codes() -> impl Iterator<Item = &'static str> {
    STATES.iter().map(|(code, _)| *code)
}
