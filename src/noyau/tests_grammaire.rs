//! Tests grammaire : priorités + associativités + cas limites.
//!
//! But : verrouiller la surface exacte de l’analyseur.
//! - priorités usuelles (+ - puis * / puis ^ puis signe unaire)
//! - ^ droite-associatif via l’appel récursif sur le facteur
//! - asymétrie des parenthèses : fermante orpheline tolérée,
//!   ouvrante jamais fermée refusée
//! - arrondi d’affichage au millième
//! - déterminisme : deux évaluations du même texte donnent le même résultat

use super::analyse::Analyseur;
use super::eval::{evaluer_expression, evaluer_valeur};

fn brut(expr: &str) -> f64 {
    Analyseur::new(expr)
        .analyser()
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn brut_err(expr: &str) {
    assert!(
        Analyseur::new(expr).analyser().is_err(),
        "expr={expr:?} aurait dû échouer"
    );
}

fn affiche(expr: &str) -> String {
    evaluer_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Priorités et associativités ------------------------ */

#[test]
fn gram_priorites_usuelles() {
    assert_eq!(brut("2+3*4"), 14.0);
    assert_eq!(brut("10/2-3"), 2.0);
    assert_eq!(brut("8/2*4"), 16.0); // * et / : gauche -> droite
    assert_eq!(brut("100/5/2"), 10.0);
}

#[test]
fn gram_parentheses_prioritaires() {
    assert_eq!(brut("(2+3)*4"), 20.0);
    assert_eq!(brut("2*(3+4)*(1+1)"), 28.0);
    assert_eq!(brut("((2))"), 2.0);
}

#[test]
fn gram_exposant_droite_associatif() {
    // 2^3^2 = 2^(3^2) = 512, pas (2^3)^2 = 64
    assert_eq!(brut("2^3^2"), 512.0);
    assert_eq!(brut("(2^3)^2"), 64.0);
}

#[test]
fn gram_exposant_fractionnaire_et_negatif() {
    assert_eq!(brut("9^0.5"), 3.0);
    assert_eq!(brut("2^-2"), 0.25);
}

#[test]
fn gram_signe_unaire() {
    // le signe enveloppe un facteur complet : -2^2 = -(2^2)
    assert_eq!(brut("-2^2"), -4.0);
    assert_eq!(brut("(-2)^2"), 4.0);
    // récursivement applicable
    assert_eq!(brut("--2"), 2.0);
    assert_eq!(brut("+-+2"), -2.0);
    assert_eq!(brut("2*-3"), -6.0);
}

/* ------------------------ Nombres ------------------------ */

#[test]
fn gram_nombres_decimaux() {
    assert_eq!(brut("1.5+2.5"), 4.0);
    assert_eq!(brut(".5*2"), 1.0); // point initial : accepté par le parse natif
    assert_eq!(brut("5."), 5.0);
}

#[test]
fn gram_nombres_invalides() {
    brut_err("1.2.3");
    brut_err(".");
    brut_err("1..2");
}

/* ------------------------ Espaces ------------------------ */

#[test]
fn gram_espaces_transparents() {
    assert_eq!(brut(" 2 + 3 "), 5.0);
    assert_eq!(brut("( 2 + 3 ) * 4"), 20.0);
    // mais pas À L'INTÉRIEUR d’un nombre : "1 2" laisse un reliquat
    brut_err("1 2");
}

/* ------------------------ Asymétrie des parenthèses ------------------------ */

#[test]
fn gram_fermante_orpheline_toleree() {
    assert_eq!(brut("2+3)"), 5.0);
    assert_eq!(brut("2+3))"), 5.0);
}

#[test]
fn gram_ouvrante_jamais_fermee_refusee() {
    brut_err("(2+3");
    brut_err("((1+2)");
}

#[test]
fn gram_fermante_au_milieu_refusee() {
    // le reliquat après l’orpheline reste une erreur
    brut_err("2+3)*2");
}

/* ------------------------ Erreurs de syntaxe ------------------------ */

#[test]
fn gram_reliquat_et_fin_prematuree() {
    brut_err("2+3*");
    brut_err("2+");
    brut_err("*3");
    brut_err("");
    brut_err("2+a");
}

/* ------------------------ Arrondi et affichage ------------------------ */

#[test]
fn gram_arrondi_au_millieme() {
    assert_eq!(affiche("1/3"), "0.333");
    assert_eq!(affiche("2/3"), "0.667");
    assert_eq!(affiche("2+3*4"), "14");
    assert_eq!(affiche("-2^2"), "-4");
    assert_eq!(affiche("10/4"), "2.5");
}

#[test]
fn gram_arrondi_valeur() {
    assert_eq!(evaluer_valeur("1/3").unwrap(), 0.333);
    // 1/16 = 0.0625 exact en binaire : le demi va vers le haut -> 0.063
    assert_eq!(evaluer_valeur("1/16").unwrap(), 0.063);
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn gram_idempotence() {
    for expr in ["2+3*4", "1/3", "√9+16", "3²", "5/0", "(2+3"] {
        let a = evaluer_expression(expr);
        let b = evaluer_expression(expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}
