//! Builder for agent cards that advertise A2UI support.

use crate::a2ui::get_a2ui_agent_extension;
use crate::types::*;

/// Builder for constructing [`AgentCard`] with sensible defaults.
///
/// # Example
///
/// ```
/// use a2ui_a2a::builders::AgentCardBuilder;
/// use a2ui_a2a::a2ui::{A2UI_EXTENSION_URI, STANDARD_CATALOG_ID};
///
/// let card = AgentCardBuilder::new("Restaurant Finder", "Finds restaurants", "1.0.0")
///     .with_url("http://localhost:10002")
///     .with_skill("find", "Find restaurants", "Search by cuisine", vec!["food".to_string()])
///     .with_streaming(true)
///     .with_a2ui_extension(false, &[STANDARD_CATALOG_ID])
///     .build();
///
/// let exts = card.capabilities.extensions.unwrap();
/// assert_eq!(exts[0].uri, A2UI_EXTENSION_URI);
/// ```
#[derive(Debug, Clone)]
pub struct AgentCardBuilder {
    name: String,
    description: String,
    version: String,
    url: String,
    documentation_url: Option<String>,
    capabilities: AgentCapabilities,
    default_input_modes: Vec<String>,
    default_output_modes: Vec<String>,
    skills: Vec<AgentSkill>,
    protocol_version: Option<String>,
}

impl AgentCardBuilder {
    /// Create a new builder with required fields.
    ///
    /// # Arguments
    ///
    /// * `name` - Human-readable agent name
    /// * `description` - Description of agent capabilities
    /// * `version` - Version string (e.g., "1.0.0")
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            url: String::new(),
            documentation_url: None,
            capabilities: AgentCapabilities::default(),
            default_input_modes: vec!["text/plain".to_string()],
            default_output_modes: vec!["text/plain".to_string()],
            skills: Vec::new(),
            protocol_version: Some("0.3".to_string()),
        }
    }

    /// Set the agent's primary URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the documentation URL.
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Enable or disable streaming support.
    pub fn with_streaming(mut self, enabled: bool) -> Self {
        self.capabilities.streaming = Some(enabled);
        self
    }

    /// Enable or disable push notifications support.
    pub fn with_push_notifications(mut self, enabled: bool) -> Self {
        self.capabilities.push_notifications = Some(enabled);
        self
    }

    /// Add a protocol extension.
    pub fn with_extension(
        mut self,
        uri: impl Into<String>,
        description: Option<String>,
        required: bool,
    ) -> Self {
        self.push_extension(AgentExtension {
            uri: uri.into(),
            description,
            required: Some(required),
            params: None,
        });
        self
    }

    /// Advertise the A2UI extension with the catalogs this agent can render.
    ///
    /// `application/json+a2ui` is added to the output modes.
    pub fn with_a2ui_extension<S: AsRef<str>>(
        mut self,
        accepts_inline_catalogs: bool,
        supported_catalog_ids: &[S],
    ) -> Self {
        self.push_extension(get_a2ui_agent_extension(
            accepts_inline_catalogs,
            supported_catalog_ids,
        ));
        let mime = crate::a2ui::A2UI_MIME_TYPE;
        if !self.default_output_modes.iter().any(|m| m == mime) {
            self.default_output_modes.push(mime.to_string());
        }
        self
    }

    /// Add a skill to the agent card.
    pub fn with_skill(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        self.skills.push(AgentSkill {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags,
            examples: None,
        });
        self
    }

    /// Add a skill with examples.
    pub fn with_skill_examples(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        examples: Vec<String>,
    ) -> Self {
        self.skills.push(AgentSkill {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags,
            examples: Some(examples),
        });
        self
    }

    /// Set the default input MIME types.
    pub fn with_input_modes(mut self, modes: Vec<String>) -> Self {
        self.default_input_modes = modes;
        self
    }

    /// Set the default output MIME types.
    pub fn with_output_modes(mut self, modes: Vec<String>) -> Self {
        self.default_output_modes = modes;
        self
    }

    /// Build the [`AgentCard`].
    pub fn build(self) -> AgentCard {
        AgentCard {
            name: self.name,
            description: self.description,
            version: self.version,
            url: self.url,
            capabilities: self.capabilities,
            default_input_modes: self.default_input_modes,
            default_output_modes: self.default_output_modes,
            skills: self.skills,
            documentation_url: self.documentation_url,
            protocol_version: self.protocol_version,
        }
    }

    fn push_extension(&mut self, extension: AgentExtension) {
        let extensions = self.capabilities.extensions.get_or_insert_with(Vec::new);
        // Re-adding an extension replaces its earlier declaration.
        extensions.retain(|ext| ext.uri != extension.uri);
        extensions.push(extension);
    }
}
