//! 分面词表宏
//!
//! 每个分面字段的取值都是封闭枚举。宏为枚举生成机器键、展示标签、
//! 别名、大小写不敏感的解析，以及以机器键为载体的 serde 实现。

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $field:literal {
            $(
                $variant:ident => ($key:literal, $label:literal $(, $alias:literal)*)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// 词表中的全部取值，按声明顺序排列
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// 机器可读的键
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// 展示用标签
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*],)+
                }
            }

            fn accepts(self, raw: &str) -> bool {
                raw.eq_ignore_ascii_case(self.key())
                    || raw.eq_ignore_ascii_case(self.label())
                    || self.aliases().iter().any(|alias| raw.eq_ignore_ascii_case(alias))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let raw = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.accepts(raw))
                    .ok_or_else(|| $crate::error::Error::UnknownValue {
                        field: $field,
                        value: raw.to_string(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.key())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl From<$name> for $crate::facets::FacetValue {
            fn from(value: $name) -> Self {
                $crate::facets::FacetValue::$name(value)
            }
        }
    };
}
