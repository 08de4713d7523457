/// This macro allows to create enums with string values. The syntax for this is like specifying a
/// enum with numeric values, just with strings instead of numbers.
/// Every created enum has a `Custom(String)` field which can be used to represent values the enum
/// does not list (in case the remote api adds another language for example) which reduces the
/// chance of breaking something.
///
/// The generated enum implements [`std::fmt::Display`] (for a representation of the values),
/// [`Default`] (which is `<name>::Custom("")`), [`From<String>`] (checks if the given string
/// matches a value representation; if not `<name>::Custom(value)`) and [`serde::Serialize`] as
/// well as [`serde::Deserialize`] for http actions.
macro_rules! enum_values {
    ($(#[$attribute:meta])* $v:vis enum $name:ident { $($field:ident = $value:expr)* }) => {
        $(
            #[$attribute]
        )*
        #[derive(Clone, Debug, PartialEq, Eq)]
        $v enum $name {
            $(
                $field
            ),*,
            Custom(String)
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let value = match self {
                    $(
                        $name::$field => $value
                    ),*,
                    $name::Custom(raw) => raw
                };
                write!(f, "{}", value)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Custom("".to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $(
                        $value => $name::$field
                    ),*,
                    _ => $name::Custom(value)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                Ok(Self::from(String::deserialize(deserializer)?))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: serde::ser::Serializer {
                serializer.serialize_str(self.to_string().as_str())
            }
        }
    };
}

/// This macro creates a struct which is primarily used to specify per-call request options for
/// specific endpoints.
///
/// Every generated struct carries a `language` field (plus builder method) which overrides the
/// client-wide default language for the one call the struct is passed to. The remaining fields
/// are endpoint specific query parameters, rendered by the generated `to_query` method; fields
/// which were never set are left out of the query entirely.
///
/// # Examples
///
/// ```ignore
/// options! {
///     EpisodesOptions;
///     page(u32, "page") = Some(1)
/// }
/// ```
///
/// Produces (simplified) the following struct implementation.
///
/// ```ignore
/// pub struct EpisodesOptions {
///     language: Option<Locale>,
///     page: Option<u32>
/// }
///
/// impl EpisodesOptions {
///     pub fn language(mut self, value: Locale) -> EpisodesOptions { /* ... */ }
///     pub fn page(mut self, value: u32) -> EpisodesOptions { /* ... */ }
///     pub(crate) fn to_query(&self, extra_params: &[(String, String)]) -> Vec<(String, String)> { /* ... */ }
/// }
/// ```
macro_rules! options {
    // `$(#[$attribute:meta])*` should generally only be used for `#[doc = "..."]`
    ($(#[$struct_attribute:meta])* $name:ident; $($(#[$attribute:meta])* $field:ident($t:ty, $query_name:literal) = $default:expr),* $(,)?) => {
        $(
            #[$struct_attribute]
        )*
        #[derive(Debug, smart_default::SmartDefault)]
        pub struct $name {
            /// Request the results of this call in the given language instead of the
            /// client-wide default.
            pub(crate) language: Option<crate::Locale>,
            $(
                $(
                    #[$attribute]
                )*
                #[default($default)]
                pub(crate) $field: Option<$t>
            ),*
        }

        impl $name {
            /// Request the results of this call in the given language instead of the
            /// client-wide default.
            pub fn language(mut self, value: crate::Locale) -> $name {
                self.language = Some(value);

                self
            }

            $(
                pub fn $field(mut self, value: $t) -> $name {
                    self.$field = Some(value);

                    self
                }
            )*

            #[allow(dead_code)]
            pub(crate) fn to_query(&self, extra_params: &[(String, String)]) -> Vec<(String, String)> {
                let params: Vec<Option<(String, String)>> = vec![
                    $(
                        self.$field.as_ref().map(|field| {
                            ($query_name.to_string(), crate::internal::serde::to_query_value(field))
                        })
                    ),*
                ];
                [extra_params, params.into_iter().flatten().collect::<Vec<_>>().as_slice()].concat()
            }
        }
    }
}

pub(crate) use enum_values;
pub(crate) use options;
