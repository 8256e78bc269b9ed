//! Static app content: guided meditations, the local support center,
//! and outbound intent links.
//!
//! # Responsibility
//! - Ship the fixed catalogs the meditation and resources screens
//!   render.
//! - Build the URLs the shell fires as outbound intents (dial, maps,
//!   WhatsApp). The shell performs the actual open; nothing here blocks
//!   on a response.

/// WhatsApp number used for appointment scheduling, in international
/// digits-only form.
pub const SCHEDULING_WHATSAPP: &str = "5533991968730";

/// One guided meditation offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidedMeditation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// External video URL the shell opens.
    pub video_url: &'static str,
    /// Icon name in the shell's icon set.
    pub icon: &'static str,
}

const MEDITATIONS: &[GuidedMeditation] = &[
    GuidedMeditation {
        id: "1",
        title: "Respiração Consciente",
        description: "Uma prática simples de respiração para reduzir ansiedade.",
        video_url: "https://www.youtube.com/watch?v=HE-082IZs4w&ab_channel=TudoSobreEspiritualidade",
        icon: "breath",
    },
    GuidedMeditation {
        id: "2",
        title: "Meditação para Relaxamento Profundo",
        description: "Relaxamento profundo para relaxar profundamente.",
        video_url: "https://www.youtube.com/watch?v=dkg1N8-cFV8&ab_channel=YogaMudraRaissaZoccal",
        icon: "yoga",
    },
    GuidedMeditation {
        id: "3",
        title: "Redução de Estresse",
        description: "Técnicas de mindfulness para momentos de estresse.",
        video_url: "https://www.youtube.com/watch?v=dyYO-k-fQDQ&ab_channel=MeditarparaDespertar",
        icon: "meditation",
    },
    GuidedMeditation {
        id: "4",
        title: "Redução de Ansiedade",
        description: "Técnicas de meditação para controle de ansiedade.",
        video_url: "https://www.youtube.com/watch?v=dyYO-k-fQDQ&t=9s&ab_channel=MeditarparaDespertar",
        icon: "heart-pulse",
    },
    GuidedMeditation {
        id: "5",
        title: "Meditacão para Dormir",
        description: "Técnicas de meditação para dormir bem.",
        video_url: "https://www.youtube.com/watch?v=z52ba6k1LSE&t=2s&ab_channel=MeditarparaDespertar",
        icon: "moon-waning-crescent",
    },
];

/// Full meditation catalog in screen order.
pub fn guided_meditations() -> &'static [GuidedMeditation] {
    MEDITATIONS
}

/// Looks one meditation up by its catalog id.
pub fn meditation_by_id(id: &str) -> Option<&'static GuidedMeditation> {
    MEDITATIONS.iter().find(|meditation| meditation.id == id)
}

/// The local psychosocial care center shown on the resources screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportCenter {
    pub name: &'static str,
    pub kind: &'static str,
    pub address: &'static str,
    /// Display form, with punctuation (e.g. "(33) 3421-3345").
    pub phone: &'static str,
    pub opening_hours: &'static str,
    pub description: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const SUPPORT_CENTER: SupportCenter = SupportCenter {
    name: "CAPS Guanhães",
    kind: "Centro de Atenção Psicossocial",
    address: "Praça Néria Coelho Guimarães - Guanhães, MG, 39740-000",
    phone: "(33) 3421-3345",
    opening_hours: "Segunda a Sexta-feira, 07:00 às 17:00",
    description: "O Centro de Atenção Psicossocial (CAPS) de Guanhães é uma unidade \
especializada em saúde mental que oferece atendimento à população, realizando o \
acompanhamento clínico e a reinserção social dos usuários pelo acesso ao trabalho, \
lazer, exercício dos direitos civis e fortalecimento dos laços familiares e \
comunitários.",
    latitude: -18.7771,
    longitude: -42.9311,
};

/// Builds a `tel:` intent URL from a display phone number, keeping only
/// its digits.
pub fn dial_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

/// Builds a Google Maps search URL centered on the given coordinates.
pub fn maps_search_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={latitude},{longitude}")
}

/// Builds the WhatsApp deep link for appointment scheduling.
pub fn whatsapp_url(phone_digits: &str) -> String {
    format!("whatsapp://send?phone={phone_digits}")
}
