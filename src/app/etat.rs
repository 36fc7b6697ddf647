//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (le tampon d’affichage)
//! et offrir des opérations simples (saisie/←/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : borne sur la longueur du tampon.

/// Jeton affiché quand l’évaluation échoue (quelle que soit la cause).
pub const TEXTE_ERREUR: &str = "Erreur";

/// Garde-fou : on borne la saisie (anti-abus / anti-gel).
const LONGUEUR_MAX: usize = 256;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- tampon d’affichage (saisie ET résultat) ---
    pub affichage: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’affichage après un clic sur un bouton.
    pub focus_affichage: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            focus_affichage: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro du tampon.
    pub fn effacer_tout(&mut self) {
        self.affichage.clear();
        self.focus_affichage = true;
    }

    /// ← : retire le dernier caractère (sans passer par le noyau).
    pub fn retour_arriere(&mut self) {
        self.affichage.pop();
        self.focus_affichage = true;
    }

    /// Saisie : ajoute le libellé d’un bouton au tampon.
    ///
    /// Si le tampon contient le jeton d’erreur d’une évaluation précédente,
    /// la nouvelle saisie repart d’un tampon vide.
    pub fn pousser(&mut self, libelle: &str) {
        if self.affichage == TEXTE_ERREUR {
            self.affichage.clear();
        }
        if self.affichage.chars().count() + libelle.chars().count() <= LONGUEUR_MAX {
            self.affichage.push_str(libelle);
        }
        self.focus_affichage = true;
    }

    /// Utilitaire : déposer un résultat (remplace tout le tampon).
    pub fn poser_resultat(&mut self, texte: impl Into<String>) {
        self.affichage = texte.into();
        self.focus_affichage = true;
    }

    /// Utilitaire : placer le jeton d’erreur.
    ///
    /// Choix UX : l’expression fautive est abandonnée (pas de correction en place).
    pub fn poser_erreur(&mut self) {
        self.affichage = TEXTE_ERREUR.to_string();
        self.focus_affichage = true;
    }
}
