//! In-memory UI state. The DOM never holds the truth: inputs write
//! through the mutators here and the views read back reactively, so the
//! submission payload can be built (and tested) without a rendered page.

use crate::api::{Matiere, MatiereSaisie, ResultatCalcul};

/// One editable row of the grade form. `note` keeps the raw text exactly
/// as typed; it is submitted untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LigneNote {
    pub nom: String,
    pub coefficient: f64,
    pub note: String,
    pub selectionnee: bool,
}

/// The grade form: one row per subject of the last fetch, in fetch order.
/// Rebuilt wholesale on every successful fetch, mutated only through the
/// methods below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formulaire {
    lignes: Vec<LigneNote>,
}

impl Formulaire {
    /// Fresh form for a fetched subject list: every row starts selected
    /// with a note of "0".
    pub fn depuis_matieres(matieres: &[Matiere]) -> Self {
        Formulaire {
            lignes: matieres
                .iter()
                .map(|m| LigneNote {
                    nom: m.nom.clone(),
                    coefficient: m.coefficient,
                    note: String::from("0"),
                    selectionnee: true,
                })
                .collect(),
        }
    }

    pub fn lignes(&self) -> &[LigneNote] {
        &self.lignes
    }

    pub fn note_de(&self, nom: &str) -> String {
        self.lignes
            .iter()
            .find(|l| l.nom == nom)
            .map(|l| l.note.clone())
            .unwrap_or_else(|| String::from("0"))
    }

    pub fn selection_de(&self, nom: &str) -> bool {
        self.lignes
            .iter()
            .find(|l| l.nom == nom)
            .map(|l| l.selectionnee)
            .unwrap_or(true)
    }

    /// Unknown names are ignored: a stale event from a row that a
    /// re-fetch removed must not reintroduce it.
    pub fn saisir_note(&mut self, nom: &str, texte: String) {
        if let Some(ligne) = self.lignes.iter_mut().find(|l| l.nom == nom) {
            ligne.note = texte;
        }
    }

    pub fn basculer_selection(&mut self, nom: &str, cochee: bool) {
        if let Some(ligne) = self.lignes.iter_mut().find(|l| l.nom == nom) {
            ligne.selectionnee = cochee;
        }
    }

    /// Every note back to "0". Selections are left alone.
    pub fn reinitialiser(&mut self) {
        for ligne in &mut self.lignes {
            ligne.note = String::from("0");
        }
    }

    /// The computation payload, in row order, raw note text included.
    /// Selection is data, not a filter: deselected rows are sent too and
    /// the server decides what to do with them.
    pub fn saisies(&self) -> Vec<MatiereSaisie> {
        self.lignes
            .iter()
            .map(|l| MatiereSaisie {
                nom: l.nom.clone(),
                coefficient: l.coefficient,
                note: l.note.clone(),
                selectionnee: l.selectionnee,
            })
            .collect()
    }
}

/// What the results section currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Panneau {
    #[default]
    Cache,
    Resultats(ResultatCalcul),
    Erreur(String),
    Succes(String),
}

impl Panneau {
    pub fn visible(&self) -> bool {
        !matches!(self, Panneau::Cache)
    }

    /// Results and errors scroll the section into view; the success
    /// banner only reveals it.
    pub fn defile(&self) -> bool {
        matches!(self, Panneau::Resultats(_) | Panneau::Erreur(_))
    }
}

/// Monotonic ids for compute submissions. Responses arrive in arbitrary
/// order, so a continuation is applied only while its id is still the
/// newest one issued (last-request-wins, not last-response-wins).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JetonCalcul {
    dernier: u64,
}

impl JetonCalcul {
    pub fn emettre(&mut self) -> u64 {
        self.dernier += 1;
        self.dernier
    }

    pub fn est_courant(&self, jeton: u64) -> bool {
        jeton == self.dernier
    }
}

/// Advisory mirror of the grade input's bounds, for styling only. Empty
/// is fine (the field is being cleared) and a comma works as decimal
/// separator. The submitted string is never rewritten.
pub fn note_valide(texte: &str) -> bool {
    if texte.is_empty() {
        return true;
    }
    texte
        .replace(',', ".")
        .parse::<f64>()
        .map(|n| (0.0..=20.0).contains(&n))
        .unwrap_or(false)
}

/// Pre-flight validation of the add-subject form. Returns the trimmed
/// name and parsed coefficient, or the alert message to show. Nothing is
/// sent to the server when this fails.
pub fn valider_nouvelle_matiere(nom: &str, coefficient: &str) -> Result<(String, f64), String> {
    let nom = nom.trim();
    if nom.is_empty() {
        return Err(String::from("Veuillez entrer un nom de matière"));
    }
    match coefficient.trim().parse::<f64>() {
        Ok(c) if c > 0.0 => Ok((nom.to_string(), c)),
        _ => Err(String::from("Le coefficient doit être supérieur à 0")),
    }
}
