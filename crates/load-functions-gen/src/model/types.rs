use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// GL data type -> load function reference (e.g. `GL_UNSIGNED_BYTE` -> `LoadToNative<GLubyte, 4>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TypeFunctions {
    #[serde(deserialize_with = "unique_keys")]
    pub by_type: BTreeMap<String, String>,
}

/// Target (renderer) format -> type functions. May contain the unknown-format sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TargetMap {
    #[serde(deserialize_with = "unique_keys")]
    pub by_target: BTreeMap<String, TypeFunctions>,
}

/// Source (GL internal) format -> target map. The root of the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormatMap {
    #[serde(deserialize_with = "unique_keys")]
    pub by_format: BTreeMap<String, TargetMap>,
}

impl TypeFunctions {
    /// Union with `default`; entries already present in `self` win.
    pub fn merged_with(&self, default: &TypeFunctions) -> TypeFunctions {
        let mut by_type = self.by_type.clone();
        for (gl_type, function) in &default.by_type {
            by_type
                .entry(gl_type.clone())
                .or_insert_with(|| function.clone());
        }
        TypeFunctions { by_type }
    }
}

impl TargetMap {
    pub fn default_functions(&self, unknown: &str) -> Option<&TypeFunctions> {
        self.by_target.get(unknown)
    }

    /// True when the only target is the sentinel, so no inner switch is needed.
    pub fn is_unconditional(&self, unknown: &str) -> bool {
        self.by_target.len() == 1 && self.by_target.contains_key(unknown)
    }

    /// Specific (non-sentinel) targets in lexicographic order.
    pub fn specific<'a>(
        &'a self,
        unknown: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a TypeFunctions)> + 'a {
        self.by_target
            .iter()
            .filter(move |(target, _)| target.as_str() != unknown)
    }
}

fn unique_keys<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = BTreeMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object with unique keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut out = BTreeMap::new();
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                match out.entry(key) {
                    Entry::Occupied(e) => {
                        return Err(de::Error::custom(format!("duplicate key: {:?}", e.key())));
                    }
                    Entry::Vacant(e) => {
                        e.insert(value);
                    }
                }
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(UniqueKeys(PhantomData))
}
