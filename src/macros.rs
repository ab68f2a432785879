/// Build a [`Value`](crate::Value) from a JSON-like literal.
///
/// Arrays become sequences, braces become mappings (keys may be any literal, or a
/// parenthesized expression), and every other token goes through `Value::from`.
///
/// ```rust
/// use serde_tagtext::{tagtext, Value};
///
/// let record = tagtext!({
///     "name": "Boot",
///     "price": 450,
///     "sizes": [40, 41, 42]
/// });
/// assert_eq!(record.get("price"), Some(&Value::Integer(450)));
/// ```
#[macro_export]
macro_rules! tagtext {
    // Handle empty sequence
    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::tagtext!($elem)),*])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Value::Mapping($crate::Map::new())
    };

    // Handle non-empty mapping
    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($key, $crate::tagtext!($value));
        )*
        $crate::Value::Mapping(map)
    }};

    // Integers, strings and other expressions with a `From` conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn test_tagtext_macro_leaves() {
        assert_eq!(tagtext!(42), Value::Integer(42));
        assert_eq!(tagtext!(-7), Value::Integer(-7));
        assert_eq!(tagtext!("hello"), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_tagtext_macro_sequences() {
        assert_eq!(tagtext!([]), Value::Sequence(vec![]));
        assert_eq!(
            tagtext!([1, "two", [3]]),
            Value::Sequence(vec![
                Value::Integer(1),
                Value::from("two"),
                Value::Sequence(vec![Value::Integer(3)]),
            ])
        );
    }

    #[test]
    fn test_tagtext_macro_mappings() {
        assert_eq!(tagtext!({}), Value::Mapping(Map::new()));

        let value = tagtext!({ "id": 1, 2: "two" });
        let map = value.as_mapping().unwrap();
        assert_eq!(map.get("id"), Some(&Value::Integer(1)));
        assert_eq!(map.get(2), Some(&Value::from("two")));
    }
}
