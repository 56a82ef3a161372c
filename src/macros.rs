/// Builds a [`Value`](crate::Value) from an inline literal.
///
/// Booleans become the bare words `True`/`False`, numbers become bare text,
/// string literals become quoted strings. Table keys pass through
/// [`Document::insert`](crate::Document::insert), so dashes normalize to
/// underscores exactly as they do when parsing.
///
/// ```rust
/// use tomlet::tomlet;
///
/// let entry = tomlet!({
///     "name": "requests",
///     "new_packages": [],
/// });
/// assert!(entry.is_table());
/// ```
#[macro_export]
macro_rules! tomlet {
    // Booleans, spelled the way the dialect writes them
    (true) => {
        $crate::Value::from(true)
    };

    (false) => {
        $crate::Value::from(false)
    };

    // Empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::tomlet!($elem)),*])
    };

    // Empty table
    ({}) => {
        $crate::Value::Table($crate::Document::new())
    };

    // Non-empty table
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::Document::new();
        $(
            table.insert($key.to_string(), $crate::tomlet!($value));
        )*
        $crate::Value::Table(table)
    }};

    // Fallback for any other expression
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
