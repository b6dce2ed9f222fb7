use std::fmt::Display;

use crate::collections::Enumerable;

/// Concatenates the elements of `sequence`, in order, with `separator` between each pair.
///
/// # Examples
/// ```
/// # use enumerable_lib::collections::List;
/// # use enumerable_lib::text::join;
/// assert_eq!(join(&List::from([1, 2, 3]), ", "), "1, 2, 3");
/// assert_eq!(join(&List::<u8>::new(), ", "), "");
/// ```
pub fn join<'a, E>(sequence: &'a E, separator: &str) -> String
where
    E: Enumerable + ?Sized,
    E::Item<'a>: Display,
{
    join_with(sequence, separator, |item| item)
}

/// Like [`join`], but renders each element through `formatter` first.
///
/// # Examples
/// ```
/// # use enumerable_lib::collections::Dictionary;
/// # use enumerable_lib::text::join_with;
/// let ages = Dictionary::from([("ada", 36), ("alan", 41)]);
/// let text = join_with(&ages, "; ", |pair| format!("{}={}", pair.key, pair.value));
/// assert_eq!(text, "ada=36; alan=41");
/// ```
pub fn join_with<'a, E, F, D>(sequence: &'a E, separator: &str, mut formatter: F) -> String
where
    E: Enumerable + ?Sized,
    F: FnMut(E::Item<'a>) -> D,
    D: Display,
{
    let mut result = String::new();
    sequence.each(|item, index| {
        if index > 0 {
            result.push_str(separator);
        }
        result.push_str(&formatter(item).to_string());
    });
    result
}
