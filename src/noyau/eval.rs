//! Noyau — évaluation (pipeline réel)
//!
//! prétraitement (x -> *, glyphes √/² détachés) -> analyse -> contrôle NaN
//!        -> arrondi au millième -> texte d’affichage
//!
//! Remarque : les glyphes unaires ne font pas partie de la grammaire ;
//! ils sont retirés de la chaîne et la fonction s’applique au tout.

use super::analyse::Analyseur;
use super::format::format_valeur;

/// Glyphe multiplication du pavé de boutons.
const GLYPHE_FOIS: char = 'x';
/// Glyphe racine carrée.
const GLYPHE_RACINE: char = '√';
/// Glyphe élévation au carré.
const GLYPHE_CARRE: char = '²';

/// API publique : évalue une expression et retourne le texte d’affichage
/// (valeur arrondie au millième), ou une erreur générique.
pub fn evaluer_expression(texte: &str) -> Result<String, String> {
    Ok(format_valeur(evaluer_valeur(texte)?))
}

/// Comme [`evaluer_expression`], mais retourne la valeur arrondie.
pub fn evaluer_valeur(texte: &str) -> Result<f64, String> {
    // le pavé écrit "x" pour la multiplication ; on canonise défensivement
    let s = texte.replace(GLYPHE_FOIS, "*");

    // Un seul glyphe unaire attendu par expression ;
    // si les deux sont présents, √ est testé en premier et gagne.
    let brut = if s.contains(GLYPHE_RACINE) {
        analyser(&s.replace(GLYPHE_RACINE, ""))?.sqrt()
    } else if s.contains(GLYPHE_CARRE) {
        analyser(&s.replace(GLYPHE_CARRE, ""))?.powi(2)
    } else {
        analyser(&s)?
    };

    // NaN (racine d’un négatif, 0/0, ...) => erreur générique.
    // Les infinis, eux, restent des valeurs (division par zéro IEEE-754).
    if brut.is_nan() {
        return Err("résultat indéfini (NaN)".into());
    }

    Ok(arrondi_millieme(brut))
}

fn analyser(s: &str) -> Result<f64, String> {
    Analyseur::new(s).analyser()
}

/// Arrondi au millième, demi-supérieur (0.0005 -> 0.001).
/// Les non-finis traversent inchangés.
fn arrondi_millieme(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    (x * 1000.0 + 0.5).floor() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::{evaluer_expression, evaluer_valeur};

    fn ok_texte(s: &str) -> String {
        evaluer_expression(s).unwrap_or_else(|e| panic!("evaluer_expression({s:?}) erreur: {e}"))
    }

    fn ok_valeur(s: &str) -> f64 {
        evaluer_valeur(s).unwrap_or_else(|e| panic!("evaluer_valeur({s:?}) erreur: {e}"))
    }

    fn erreur(s: &str) {
        assert!(evaluer_valeur(s).is_err(), "{s:?} aurait dû échouer");
    }

    // --- Pipeline complet ---

    #[test]
    fn pipeline_complet() {
        assert_eq!(ok_texte("2+3*4"), "14");
        assert_eq!(ok_texte("1/3"), "0.333");
    }

    #[test]
    fn glyphe_multiplication() {
        assert_eq!(ok_valeur("2x3"), 6.0);
        assert_eq!(ok_valeur("2x(1+2)"), 6.0);
    }

    // --- Glyphes unaires ---

    #[test]
    fn glyphe_racine() {
        assert_eq!(ok_valeur("√9"), 3.0);
        // le glyphe est détaché où qu’il soit : √9+16 = √(9+16)
        assert_eq!(ok_valeur("√9+16"), 5.0);
    }

    #[test]
    fn glyphe_carre() {
        assert_eq!(ok_valeur("3²"), 9.0);
        assert_eq!(ok_valeur("(1+2)²"), 9.0);
    }

    #[test]
    fn racine_negatif_erreur() {
        erreur("√(0-9)");
    }

    // --- Domaine numérique ---

    #[test]
    fn division_par_zero_valeur_infinie() {
        assert_eq!(ok_valeur("5/0"), f64::INFINITY);
        assert_eq!(ok_texte("5/0"), "∞");
        assert_eq!(ok_texte("-5/0"), "-∞");
    }

    #[test]
    fn zero_sur_zero_erreur() {
        erreur("0/0");
    }
}
