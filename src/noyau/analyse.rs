// src/noyau/analyse.rs
//
// Analyseur récursif descendant (caractère par caractère)
// -------------------------------------------------------
// Grammaire (priorités croissantes) :
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('*' | '/') facteur)*
//   facteur    := ('+' | '-') facteur
//               | primaire ('^' facteur)?       <- droite-associatif
//   primaire   := '(' expression ')' | nombre
//
// Règles:
// - Un seul caractère d’avance ; pas de passe de tokenisation.
// - Les espaces sont consommés à chaque tentative de correspondance.
// - Le signe unaire enveloppe un facteur complet : "-2^2" = -(2^2) = -4.
// - Parenthèse fermante orpheline APRÈS l’expression : tolérée (analyser()).
//   Parenthèse ouvrante jamais fermée : erreur (facteur()).

/// Analyseur sur une séquence de caractères + curseur.
/// Une instance = une analyse ; aucun état ne survit à l’appel.
pub struct Analyseur {
    chars: Vec<char>,
    pos: usize,
}

impl Analyseur {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    /// Caractère significatif courant (espaces consommés), sans le manger.
    fn courant(&mut self) -> Option<char> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        self.chars.get(self.pos).copied()
    }

    /// Consomme `attendu` si c’est le prochain caractère significatif.
    fn mange(&mut self, attendu: char) -> bool {
        if self.courant() == Some(attendu) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Analyse complète : une expression, puis rien d’autre.
    ///
    /// Les parenthèses fermantes orphelines en fin d’entrée sont consommées
    /// sans effet ; tout autre reliquat est une erreur.
    pub fn analyser(mut self) -> Result<f64, String> {
        let x = self.expression()?;

        while self.mange(')') {}

        match self.courant() {
            None => Ok(x),
            Some(c) => Err(format!("caractère inattendu: '{c}'")),
        }
    }

    fn expression(&mut self) -> Result<f64, String> {
        let mut x = self.terme()?;
        loop {
            if self.mange('+') {
                x += self.terme()?;
            } else if self.mange('-') {
                x -= self.terme()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn terme(&mut self) -> Result<f64, String> {
        let mut x = self.facteur()?;
        loop {
            if self.mange('*') {
                x *= self.facteur()?;
            } else if self.mange('/') {
                // division par zéro : sémantique IEEE-754 (±∞ / NaN), pas une erreur
                x /= self.facteur()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn facteur(&mut self) -> Result<f64, String> {
        // signe unaire, applicable récursivement
        if self.mange('+') {
            return self.facteur();
        }
        if self.mange('-') {
            return Ok(-self.facteur()?);
        }

        let x = if self.mange('(') {
            let x = self.expression()?;
            if !self.mange(')') {
                return Err("parenthèse ouvrante jamais fermée".into());
            }
            x
        } else {
            self.nombre()?
        };

        // exposant : droite-associatif via l’appel récursif sur facteur()
        if self.mange('^') {
            return Ok(x.powf(self.facteur()?));
        }

        Ok(x)
    }

    /// nombre := suite maximale de chiffres et de points, validée par parse::<f64>.
    /// "1.2.3" et "." isolé échouent ; ".5" passe (comme le parse natif).
    fn nombre(&mut self) -> Result<f64, String> {
        match self.courant() {
            Some(c) if c.is_ascii_digit() || c == '.' => {}
            Some(c) => return Err(format!("caractère inattendu: '{c}'")),
            None => return Err("fin d’entrée inattendue".into()),
        }

        let debut = self.pos;
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            if c.is_ascii_digit() || c == '.' {
                self.pos += 1;
            } else {
                break;
            }
        }

        let brut: String = self.chars[debut..self.pos].iter().collect();
        brut.parse::<f64>()
            .map_err(|_| format!("nombre invalide: '{brut}'"))
    }
}
