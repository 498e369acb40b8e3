use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

/// Accepts either a bare number or a string such as `"18px"`.
pub fn de_pixels<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrFloat::deserialize(deserializer)?
        .into_pixels()
        .map_err(D::Error::custom)
}

pub fn de_size_map<'de, D>(deserializer: D) -> Result<IndexMap<String, f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, StringOrFloat>::deserialize(deserializer)?;

    raw.into_iter()
        .map(|(key, value)| match value.into_pixels() {
            Ok(pixels) => Ok((key, pixels)),
            Err(err) => Err(D::Error::custom(format!("size \"{key}\": {err}"))),
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

impl StringOrFloat {
    fn into_pixels(self) -> Result<f32, &'static str> {
        match self {
            StringOrFloat::Float(pixels) => Ok(pixels),

            StringOrFloat::String(string) => {
                let Some(string) = string.trim().strip_suffix("px") else {
                    return Err("expected string to end with 'px'");
                };

                string
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| "could not convert string into pixels")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Measured {
        #[serde(deserialize_with = "de_pixels")]
        value: f32,
    }

    #[derive(Deserialize)]
    struct Sizes {
        #[serde(deserialize_with = "de_size_map")]
        sizes: IndexMap<String, f32>,
    }

    #[test]
    fn test_pixels_from_number() {
        let sized: Measured = serde_json::from_str(r#"{ "value": 8 }"#).unwrap();
        assert_eq!(sized.value, 8.0);

        let sized: Measured = serde_json::from_str(r#"{ "value": 6.27 }"#).unwrap();
        assert_eq!(sized.value, 6.27);
    }

    #[test]
    fn test_pixels_from_px_string() {
        let sized: Measured = serde_json::from_str(r#"{ "value": "18px" }"#).unwrap();
        assert_eq!(sized.value, 18.0);
    }

    #[test]
    fn test_pixels_rejects_other_units() {
        assert!(serde_json::from_str::<Measured>(r#"{ "value": "2rem" }"#).is_err());
        assert!(serde_json::from_str::<Measured>(r#"{ "value": "abcpx" }"#).is_err());
        assert!(serde_json::from_str::<Measured>(r#"{ "value": true }"#).is_err());
    }

    #[test]
    fn test_size_map_keeps_order() {
        let sizes: Sizes =
            serde_json::from_str(r#"{ "sizes": { "s-10": 12, "m-18": "18px", "l-24": 24 } }"#)
                .unwrap();

        let keys: Vec<_> = sizes.sizes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["s-10", "m-18", "l-24"]);
        assert_eq!(sizes.sizes["m-18"], 18.0);
    }

    #[test]
    fn test_size_map_names_bad_key() {
        let err = serde_json::from_str::<Sizes>(r#"{ "sizes": { "xl": "big" } }"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("size \"xl\""));
    }
}
