//! Typed helpers for the three same-origin endpoints.
//!
//! The wire field names (`nom`, `coefficient`, `note`, `selectionnee`,
//! `moyenne`, `couleur`, `appreciation`) are the server contract and must
//! not be renamed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Business error reported by the server as an `error` field.
    #[error("{0}")]
    Serveur(String),

    /// Transport failure (request never completed).
    #[error("{0}")]
    Reseau(#[from] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("réponse illisible: {0}")]
    Decodage(#[from] serde_json::Error),
}

/// A subject as returned by `GET /api/matieres`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Matiere {
    pub nom: String,
    pub coefficient: f64,
}

/// One row as submitted for computation. `note` carries the raw text of
/// the grade input, forwarded untouched; parsing and bounds checking are
/// the server's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatiereSaisie {
    pub nom: String,
    pub coefficient: f64,
    pub note: String,
    pub selectionnee: bool,
}

#[derive(Serialize)]
struct DemandeCalcul {
    matieres: Vec<MatiereSaisie>,
}

/// A subject echoed back by the computation, grade parsed server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatiereResultat {
    pub nom: String,
    pub coefficient: f64,
    pub note: f64,
}

/// Successful computation: the average, its color token and label, and
/// the subjects actually used, in server order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultatCalcul {
    pub moyenne: f64,
    pub couleur: String,
    pub appreciation: String,
    pub matieres: Vec<MatiereResultat>,
}

#[derive(Serialize)]
struct DemandeAjout<'a> {
    nom: &'a str,
    coefficient: f64,
}

/// POST bodies come back either as the expected payload or as
/// `{"error": "..."}`. The HTTP status alone is not meaningful: a 400
/// still carries an error body that must be surfaced verbatim.
#[derive(Deserialize)]
#[serde(untagged)]
enum Enveloppe<T> {
    Erreur { error: String },
    Valeur(T),
}

fn decoder<T: DeserializeOwned>(corps: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<Enveloppe<T>>(corps)? {
        Enveloppe::Erreur { error } => Err(ApiError::Serveur(error)),
        Enveloppe::Valeur(valeur) => Ok(valeur),
    }
}

/// reqwest only accepts absolute URLs, so same-origin paths are resolved
/// against `window.location.origin`.
fn url(chemin: &str) -> String {
    let origine = web_sys::window()
        .and_then(|fenetre| fenetre.location().origin().ok())
        .unwrap_or_default();
    format!("{origine}{chemin}")
}

pub async fn fetch_matieres() -> Result<Vec<Matiere>, ApiError> {
    let reponse = reqwest::get(url("/api/matieres")).await?;
    Ok(reponse.json().await?)
}

pub async fn calculer(matieres: Vec<MatiereSaisie>) -> Result<ResultatCalcul, ApiError> {
    let corps = reqwest::Client::new()
        .post(url("/api/calculer"))
        .json(&DemandeCalcul { matieres })
        .send()
        .await?
        .text()
        .await?;
    decoder(&corps)
}

pub async fn ajouter_matiere(nom: &str, coefficient: f64) -> Result<(), ApiError> {
    let corps = reqwest::Client::new()
        .post(url("/api/ajouter-matiere"))
        .json(&DemandeAjout { nom, coefficient })
        .send()
        .await?
        .text()
        .await?;
    // The confirmation object is opaque; only the error envelope matters.
    decoder::<serde_json::Value>(&corps).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saisie(nom: &str, coefficient: f64, note: &str, selectionnee: bool) -> MatiereSaisie {
        MatiereSaisie {
            nom: nom.to_string(),
            coefficient,
            note: note.to_string(),
            selectionnee,
        }
    }

    #[test]
    fn test_compute_request_keeps_server_field_names() {
        let demande = DemandeCalcul {
            matieres: vec![saisie("Maths", 3.0, "15", true)],
        };
        let json = serde_json::to_value(&demande).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "matieres": [
                    {"nom": "Maths", "coefficient": 3.0, "note": "15", "selectionnee": true}
                ]
            })
        );
    }

    #[test]
    fn test_note_is_sent_as_the_raw_input_text() {
        // Whatever the field holds goes out unmodified, even a comma
        // decimal or garbage text. The server owns validation.
        let json = serde_json::to_value(saisie("Philo", 2.0, "12,5", false)).unwrap();
        assert_eq!(json["note"], "12,5");
        assert_eq!(json["selectionnee"], false);

        let json = serde_json::to_value(saisie("Philo", 2.0, "abc", true)).unwrap();
        assert_eq!(json["note"], "abc");
    }

    #[test]
    fn test_add_request_shape() {
        let json = serde_json::to_value(DemandeAjout {
            nom: "Chimie",
            coefficient: 2.0,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"nom": "Chimie", "coefficient": 2.0}));
    }

    #[test]
    fn test_decode_well_formed_result() {
        let corps = r##"{
            "moyenne": 15.0,
            "couleur": "#4caf50",
            "appreciation": "Bien",
            "matieres": [{"nom": "Maths", "coefficient": 3, "note": 15}]
        }"##;
        let resultat: ResultatCalcul = decoder(corps).unwrap();
        assert_eq!(resultat.moyenne, 15.0);
        assert_eq!(resultat.couleur, "#4caf50");
        assert_eq!(resultat.appreciation, "Bien");
        assert_eq!(resultat.matieres.len(), 1);
        assert_eq!(resultat.matieres[0].nom, "Maths");
        assert_eq!(resultat.matieres[0].coefficient, 3.0);
        assert_eq!(resultat.matieres[0].note, 15.0);
    }

    #[test]
    fn test_decode_surfaces_the_error_field_verbatim() {
        let erreur = decoder::<ResultatCalcul>(r#"{"error": "Veuillez sélectionner au moins une matière"}"#)
            .unwrap_err();
        match erreur {
            ApiError::Serveur(message) => {
                assert_eq!(message, "Veuillez sélectionner au moins une matière")
            }
            autre => panic!("expected Serveur, got {autre:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_a_non_json_body() {
        let erreur = decoder::<ResultatCalcul>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(erreur, ApiError::Decodage(_)));
    }

    #[test]
    fn test_add_confirmation_body_is_opaque() {
        // The create endpoint answers with an arbitrary confirmation
        // object; anything without an `error` field is a success.
        let corps = r#"{"success": true, "matiere": {"nom": "Chimie", "coefficient": 2.0}}"#;
        assert!(decoder::<serde_json::Value>(corps).is_ok());
    }
}
