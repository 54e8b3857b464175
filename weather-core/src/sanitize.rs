/// Reduce a user-supplied city name to letters and whitespace, trimmed.
///
/// Letters are matched with [`char::is_alphabetic`], so accented names such as
/// "Zürich" pass through untouched. An empty return value means the input had
/// nothing usable in it.
pub fn sanitize_city(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();

    kept.trim().to_string()
}
