use regex::Regex;

/// Collapse whitespace and rewrite `?` placeholders to Postgres `$n`
/// parameters, so queries can be written in the portable style.
pub fn sql(query: &str) -> String {
    let placeholder = Regex::new(r"\?").unwrap();
    let mut out = query.split_whitespace().collect::<Vec<&str>>().join(" ");
    let mut next_param = 1;
    while let Some(found) = placeholder.find(&out) {
        out.replace_range(found.range(), &format!("${next_param}"));
        next_param += 1;
    }
    out
}
