/// Build a [`Container`](crate::Container) from a mixed item list.
///
/// A brace group of `key => value` pairs is a field bundle; any other
/// expression is appended as a value.
///
/// ```
/// use mixtable::{container, Value};
///
/// let t = container![1, 2, { "a" => "1", "b" => "2" }, 7, 8];
/// assert_eq!(t.len(), 4);
/// assert_eq!(t.property("b"), Some(Value::from("2")));
/// ```
#[macro_export]
macro_rules! container {
    (@push $items:ident;) => {};
    (@push $items:ident; { $($key:expr => $value:expr),* $(,)? } $(, $($rest:tt)*)?) => {
        $items.push($crate::Item::Fields(
            $crate::FieldBundle::new()$(.with($key, $value))*
        ));
        $crate::container!(@push $items; $($($rest)*)?);
    };
    (@push $items:ident; $value:expr $(, $($rest:tt)*)?) => {
        $items.push($crate::Item::from($value));
        $crate::container!(@push $items; $($($rest)*)?);
    };
    () => {
        $crate::Container::default()
    };
    ($($rest:tt)+) => {{
        let mut items: ::std::vec::Vec<$crate::Item> = ::std::vec::Vec::new();
        $crate::container!(@push items; $($rest)+);
        $crate::Container::new(items)
    }};
}
