//! Professional directory: catalog, search and appointment gating.
//!
//! # Responsibility
//! - Ship the fixed professional list the directory screen renders.
//! - Filter by free-text query and by normalized specialty.
//! - Gate appointment requests on professional availability.
//!
//! # Invariants
//! - Specialty filtering compares the normalized [`Specialty`], never
//!   the gendered display label, so "Psicóloga" entries match the
//!   "Psicólogo" filter chip.

/// Normalized professional specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialty {
    Psychologist,
    Psychiatrist,
    Therapist,
}

impl Specialty {
    /// Canonical filter-chip label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Psychologist => "Psicólogo",
            Self::Psychiatrist => "Psiquiatra",
            Self::Therapist => "Terapeuta",
        }
    }

    /// Resolves a filter-chip label; "Todos" and unknown labels resolve
    /// to `None` (no filter).
    pub fn from_label(label: &str) -> Option<Specialty> {
        match label.trim() {
            "Psicólogo" => Some(Self::Psychologist),
            "Psiquiatra" => Some(Self::Psychiatrist),
            "Terapeuta" => Some(Self::Therapist),
            _ => None,
        }
    }
}

/// One listed mental-health professional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Professional {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: Specialty,
    /// Gendered display label as rendered on the card.
    pub specialty_label: &'static str,
    pub rating: f32,
    pub experience: &'static str,
    pub description: &'static str,
    pub available: bool,
}

const PROFESSIONALS: &[Professional] = &[
    Professional {
        id: "1",
        name: "Dra. Maria Silva",
        specialty: Specialty::Psychologist,
        specialty_label: "Psicóloga",
        rating: 4.8,
        experience: "15 anos",
        description: "Especialista em terapia cognitivo-comportamental e ansiedade.",
        available: true,
    },
    Professional {
        id: "2",
        name: "Dr. João Santos",
        specialty: Specialty::Psychiatrist,
        specialty_label: "Psiquiatra",
        rating: 4.9,
        experience: "20 anos",
        description: "Especializado em tratamento de depressão e transtornos do humor.",
        available: true,
    },
    Professional {
        id: "3",
        name: "Dra. Ana Oliveira",
        specialty: Specialty::Psychologist,
        specialty_label: "Psicóloga",
        rating: 4.7,
        experience: "10 anos",
        description: "Foco em relacionamentos e terapia familiar.",
        available: false,
    },
];

/// Directory error for appointment use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No professional with this id.
    NotFound(String),
    /// Professional exists but is not taking appointments.
    Unavailable(&'static str),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "professional not found: {id}"),
            Self::Unavailable(name) => write!(f, "professional unavailable: {name}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Full professional list in screen order.
pub fn professionals() -> &'static [Professional] {
    PROFESSIONALS
}

/// Filters professionals by free-text query (name or specialty label,
/// case-insensitive substring) and optional normalized specialty.
pub fn search(query: &str, specialty: Option<Specialty>) -> Vec<&'static Professional> {
    let needle = query.trim().to_lowercase();
    PROFESSIONALS
        .iter()
        .filter(|professional| {
            let matches_query = needle.is_empty()
                || professional.name.to_lowercase().contains(&needle)
                || professional.specialty_label.to_lowercase().contains(&needle);
            let matches_specialty =
                specialty.map_or(true, |wanted| professional.specialty == wanted);
            matches_query && matches_specialty
        })
        .collect()
}

/// Validates an appointment request against availability.
///
/// Returns the professional so callers can word the confirmation.
pub fn request_appointment(id: &str) -> Result<&'static Professional, DirectoryError> {
    let professional = PROFESSIONALS
        .iter()
        .find(|professional| professional.id == id)
        .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

    if !professional.available {
        return Err(DirectoryError::Unavailable(professional.name));
    }
    Ok(professional)
}

#[cfg(test)]
mod tests {
    use super::{request_appointment, search, DirectoryError, Specialty};

    #[test]
    fn query_matches_name_and_specialty_case_insensitively() {
        let by_name = search("maria", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "1");

        let by_specialty = search("psiquiatra", None);
        assert_eq!(by_specialty.len(), 1);
        assert_eq!(by_specialty[0].id, "2");
    }

    #[test]
    fn specialty_filter_matches_gendered_display_labels() {
        let psychologists = search("", Some(Specialty::Psychologist));
        assert_eq!(psychologists.len(), 2);
        assert!(psychologists
            .iter()
            .all(|professional| professional.specialty_label == "Psicóloga"));
    }

    #[test]
    fn all_filter_label_means_no_filter() {
        assert_eq!(Specialty::from_label("Todos"), None);
        assert_eq!(search("", None).len(), 3);
    }

    #[test]
    fn appointments_are_gated_on_availability() {
        assert!(request_appointment("1").is_ok());
        assert_eq!(
            request_appointment("3"),
            Err(DirectoryError::Unavailable("Dra. Ana Oliveira"))
        );
        assert!(matches!(
            request_appointment("42"),
            Err(DirectoryError::NotFound(_))
        ));
    }
}
