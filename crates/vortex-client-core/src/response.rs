//! Configuration artifact model.
//!
//! `ConfigResponse` mirrors the document shape served by Spring-compatible
//! config servers so fetchers can deserialize payloads directly into it.
//! Property sources are ordered by precedence: the first source wins when
//! the same key appears more than once.

use crate::error::{ConfigError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named bundle of configuration properties.
///
/// Usually corresponds to one file on the server side
/// (e.g. "application-dev.yml").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySource {
    /// Name/path of the originating configuration file.
    pub name: String,

    /// Properties as a key-value map. Keys are flat, dotted paths
    /// ("spring.datasource.port"). Insertion order is preserved so text
    /// renderings are deterministic.
    pub source: IndexMap<String, Value>,
}

impl PropertySource {
    /// Creates a new PropertySource.
    pub fn new(name: impl Into<String>, source: IndexMap<String, Value>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

/// The configuration document for one (application, profile, label) identity.
///
/// # Example
///
/// ```
/// use vortex_client_core::{ConfigResponse, PropertySource};
/// use indexmap::IndexMap;
///
/// let mut source = IndexMap::new();
/// source.insert("server.port".to_string(), serde_json::json!(8080));
///
/// let response = ConfigResponse::empty("myapp", vec!["dev".to_string()])
///     .with_property_source(PropertySource::new("application-dev.yml", source));
///
/// assert_eq!(response.get_i64("server.port"), Some(8080));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    /// Nombre de la aplicacion
    pub name: String,

    /// Lista de profiles activos
    pub profiles: Vec<String>,

    /// Label (branch/tag) usado, None si no se especifico
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Version del commit en el servidor (para backends Git)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Estado adicional reportado por el servidor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Property sources en orden de precedencia (primero = mayor prioridad)
    #[serde(default)]
    pub property_sources: Vec<PropertySource>,
}

impl ConfigResponse {
    /// Creates an empty response for an application and profiles.
    pub fn empty(name: impl Into<String>, profiles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            profiles,
            label: None,
            version: None,
            state: None,
            property_sources: Vec::new(),
        }
    }

    /// Builder-style method to set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder-style method to set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builder-style method to append a property source.
    ///
    /// Sources appended first have higher precedence.
    pub fn with_property_source(mut self, source: PropertySource) -> Self {
        self.property_sources.push(source);
        self
    }

    /// Flattens all property sources into a single map.
    ///
    /// Earlier sources take precedence over later ones for duplicate keys.
    /// Key order follows the winning sources, highest precedence first.
    pub fn merged_properties(&self) -> IndexMap<String, Value> {
        let mut merged = IndexMap::new();

        for ps in &self.property_sources {
            for (key, value) in &ps.source {
                merged.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }

        merged
    }

    /// Looks up a property by key, respecting source precedence.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.property_sources
            .iter()
            .find_map(|ps| ps.source.get(key))
    }

    /// Retrieves a property as a string.
    ///
    /// Scalar values of other types (numbers, booleans) are rendered to
    /// their display form; composite values and null return None.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.get_value(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Retrieves a property as an i64.
    ///
    /// Accepts integer values directly and truncates floats.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let number = self.get_value(key)?.as_number()?;
        number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f as i64))
    }

    /// Retrieves a property as a bool.
    ///
    /// Accepts boolean values and the strings "true" (case-insensitive)
    /// and "1".
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get_value(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => Some(s.eq_ignore_ascii_case("true") || s == "1"),
            _ => None,
        }
    }

    /// Renders the merged properties as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.merged_properties())
            .map_err(|e| ConfigError::serialize("json", e.to_string()))
    }

    /// Renders the merged properties as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.merged_properties())
            .map_err(|e| ConfigError::serialize("yaml", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn sample_response() -> ConfigResponse {
        ConfigResponse::empty("myapp", vec!["dev".to_string()])
            .with_label("master")
            .with_property_source(PropertySource::new(
                "application-dev.yml",
                source(&[
                    ("spring.datasource.host", json!("localhost")),
                    ("spring.datasource.port", json!(5432)),
                    ("app.debug", json!(true)),
                ]),
            ))
    }

    #[test]
    fn test_empty_response() {
        let response = ConfigResponse::empty("myapp", vec!["dev".to_string()]);
        assert_eq!(response.name, "myapp");
        assert_eq!(response.profiles, vec!["dev"]);
        assert!(response.label.is_none());
        assert!(response.property_sources.is_empty());
    }

    #[test]
    fn test_typed_getters() {
        let response = sample_response();

        assert_eq!(
            response.get_string("spring.datasource.host"),
            Some("localhost".to_string())
        );
        assert_eq!(response.get_i64("spring.datasource.port"), Some(5432));
        assert_eq!(response.get_bool("app.debug"), Some(true));
        assert_eq!(response.get_value("missing"), None);
    }

    #[test]
    fn test_get_string_coerces_scalars() {
        let response = ConfigResponse::empty("myapp", vec![]).with_property_source(
            PropertySource::new(
                "coercion.yml",
                source(&[
                    ("port", json!(8080)),
                    ("enabled", json!(false)),
                    ("nested", json!({"a": 1})),
                ]),
            ),
        );

        assert_eq!(response.get_string("port"), Some("8080".to_string()));
        assert_eq!(response.get_string("enabled"), Some("false".to_string()));
        // Valores compuestos no se convierten
        assert_eq!(response.get_string("nested"), None);
    }

    #[test]
    fn test_get_bool_accepts_strings() {
        let response = ConfigResponse::empty("myapp", vec![]).with_property_source(
            PropertySource::new(
                "flags.yml",
                source(&[
                    ("a", json!("true")),
                    ("b", json!("TRUE")),
                    ("c", json!("1")),
                    ("d", json!("yes")),
                ]),
            ),
        );

        assert_eq!(response.get_bool("a"), Some(true));
        assert_eq!(response.get_bool("b"), Some(true));
        assert_eq!(response.get_bool("c"), Some(true));
        assert_eq!(response.get_bool("d"), Some(false));
    }

    #[test]
    fn test_get_i64_truncates_floats() {
        let response = ConfigResponse::empty("myapp", vec![]).with_property_source(
            PropertySource::new("nums.yml", source(&[("timeout", json!(30.9))])),
        );

        assert_eq!(response.get_i64("timeout"), Some(30));
    }

    #[test]
    fn test_merge_first_source_wins() {
        let response = ConfigResponse::empty("myapp", vec![])
            .with_property_source(PropertySource::new(
                "application-dev.yml",
                source(&[("key2", json!("override")), ("key3", json!("from-dev"))]),
            ))
            .with_property_source(PropertySource::new(
                "application.yml",
                source(&[("key1", json!("base")), ("key2", json!("base"))]),
            ));

        let merged = response.merged_properties();

        assert_eq!(merged.get("key1"), Some(&json!("base")));
        assert_eq!(merged.get("key2"), Some(&json!("override")));
        assert_eq!(merged.get("key3"), Some(&json!("from-dev")));

        // get_value sigue la misma precedencia que el merge
        assert_eq!(response.get_value("key2"), Some(&json!("override")));
    }

    #[test]
    fn test_merged_key_order_is_precedence_order() {
        let response = ConfigResponse::empty("myapp", vec![])
            .with_property_source(PropertySource::new(
                "high.yml",
                source(&[("b", json!(1)), ("a", json!(1))]),
            ))
            .with_property_source(PropertySource::new(
                "low.yml",
                source(&[("z", json!(2)), ("a", json!(2))]),
            ));

        let merged = response.merged_properties();
        let keys: Vec<&String> = merged.keys().collect();
        assert_eq!(keys, vec!["b", "a", "z"]);
    }

    #[test]
    fn test_deserialize_spring_payload() {
        let payload = r#"{
            "name": "myapp",
            "profiles": ["dev"],
            "label": "master",
            "version": "abc123",
            "propertySources": [
                {
                    "name": "application-dev.yml",
                    "source": {"server.port": 8080}
                }
            ]
        }"#;

        let response: ConfigResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.name, "myapp");
        assert_eq!(response.label.as_deref(), Some("master"));
        assert_eq!(response.version.as_deref(), Some("abc123"));
        assert_eq!(response.get_i64("server.port"), Some(8080));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let response = sample_response();
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"propertySources\""));
        assert!(json.contains("\"name\":\"myapp\""));
    }

    #[test]
    fn test_to_json_and_yaml_render_merged_view() {
        let response = sample_response();

        let json = response.to_json().unwrap();
        assert!(json.contains("\"spring.datasource.port\": 5432"));

        let yaml = response.to_yaml().unwrap();
        assert!(yaml.contains("spring.datasource.port: 5432"));
    }
}
