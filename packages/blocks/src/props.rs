//! Typed props records, one per block kind.
//!
//! Every record deserializes from any subset of its keys (`#[serde(default)]`
//! on the struct) so that documents written by older editor versions, or
//! hand-edited rows, still load. Unknown keys are ignored on the way in and
//! therefore dropped on the next save; `props.id` is carried but advisory.

use serde::{Deserialize, Serialize};

/// Opening banner with headline and call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_link: String,
    /// Background image URL; rendered as a placeholder when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub background_color: String,
    pub text_color: String,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            id: None,
            title: "Estilo que marca".to_string(),
            subtitle: "Cortes clássicos e modernos no coração da cidade".to_string(),
            cta_label: "Agende seu horário".to_string(),
            cta_link: "#booking".to_string(),
            image: None,
            background_color: "#1a1a1a".to_string(),
            text_color: "#f5f0e8".to_string(),
        }
    }
}

/// One service entry, shared by both services-flavored blocks.
///
/// Historically `ServicesGrid` stored the label under `title` while
/// `ServiceList` stored it under `name`; both keys are accepted and each
/// block resolves its own preference (see [`ServiceItem::grid_label`] and
/// [`ServiceItem::list_label`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

const SERVICE_PLACEHOLDER: &str = "Serviço";

impl ServiceItem {
    pub fn new(title: impl Into<String>, price: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            name: None,
            price: Some(price.into()),
            duration: Some(duration.into()),
            description: None,
        }
    }

    /// Label as resolved by the card grid: `title`, else `name`, else a
    /// placeholder.
    pub fn grid_label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(SERVICE_PLACEHOLDER)
    }

    /// Label as resolved by the price table: `name`, else `title`, else a
    /// placeholder.
    pub fn list_label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(SERVICE_PLACEHOLDER)
    }
}

/// Card grid of services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesGridProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub services: Vec<ServiceItem>,
    /// Cards per row; one of "2", "3", "4".
    pub columns: String,
    pub background_color: String,
    pub accent_color: String,
}

impl Default for ServicesGridProps {
    fn default() -> Self {
        Self {
            id: None,
            title: "Nossos Serviços".to_string(),
            subtitle: "Do clássico ao contemporâneo".to_string(),
            services: vec![
                ServiceItem::new("Corte Masculino", "R$ 70", "45 min"),
                ServiceItem::new("Barba Completa", "R$ 50", "30 min"),
                ServiceItem::new("Corte + Barba", "R$ 110", "1h 15min"),
            ],
            columns: "3".to_string(),
            background_color: "#ffffff".to_string(),
            accent_color: "#c8a45d".to_string(),
        }
    }
}

/// Compact price table of services. Same semantic data as
/// [`ServicesGridProps`] with independently-evolved field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceListProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub heading: String,
    pub items: Vec<ServiceItem>,
    pub background_color: String,
}

impl Default for ServiceListProps {
    fn default() -> Self {
        let item = |name: &str, price: &str, duration: &str| ServiceItem {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
            duration: Some(duration.to_string()),
            ..ServiceItem::default()
        };
        Self {
            id: None,
            heading: "Tabela de Preços".to_string(),
            items: vec![
                item("Corte Masculino", "R$ 70", "45 min"),
                item("Sobrancelha", "R$ 25", "15 min"),
                item("Pezinho", "R$ 30", "20 min"),
            ],
            background_color: "#f5f0e8".to_string(),
        }
    }
}

/// One team member entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Portrait URL; placeholder when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            photo: None,
            instagram: None,
        }
    }
}

/// Team member gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub members: Vec<TeamMember>,
    pub background_color: String,
}

impl Default for TeamProps {
    fn default() -> Self {
        Self {
            id: None,
            title: "Nossa Equipe".to_string(),
            subtitle: "Profissionais que entendem do assunto".to_string(),
            members: vec![
                TeamMember::new("Rafael Souza", "Barbeiro Master"),
                TeamMember::new("Diego Lima", "Barbeiro"),
            ],
            background_color: "#1a1a1a".to_string(),
        }
    }
}

/// Booking call-to-action strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub button_label: String,
    pub button_link: String,
    pub background_color: String,
    pub accent_color: String,
}

impl Default for BookingProps {
    fn default() -> Self {
        Self {
            id: None,
            title: "Agende seu horário".to_string(),
            subtitle: "Escolha o profissional e o melhor horário para você".to_string(),
            button_label: "Agendar agora".to_string(),
            button_link: "/agendar".to_string(),
            background_color: "#c8a45d".to_string(),
            accent_color: "#1a1a1a".to_string(),
        }
    }
}
