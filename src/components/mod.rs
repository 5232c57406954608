pub mod ajout_modal;
pub mod matiere_row;
pub mod resultats_panel;
