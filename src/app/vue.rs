// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), Backspace natif du champ
// - Tactile : gros boutons, focus redonné après clic (focus_affichage)
//
// Disposition du pavé (4 lignes × 5 colonnes) :
//   7 8 9 ← AC
//   4 5 6 x /
//   1 2 3 - +
//   0 . √ ² =

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .hint_text("0")
                .id_source("affichage_edit"),
        );

        // Si on a cliqué un bouton (pavé), on redonne le focus
        if self.focus_affichage {
            resp.request_focus();
            self.focus_affichage = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements “globaux” quand l’utilisateur clique ailleurs,
        // et le double déclenchement Enter + bouton "=".
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer_via_noyau();
            self.focus_affichage = true;
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_action(ui, "←", "Efface le dernier caractère", Action::RetourArriere);
                self.bouton_action(ui, "AC", "Remise à zéro", Action::EffacerTout);
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "x");
                self.bouton_insert(ui, "/");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "-");
                self.bouton_insert(ui, "+");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_insert(ui, "√");
                self.bouton_insert(ui, "²");
                self.bouton_action(ui, "=", "Évalue l’expression", Action::Calculer);
                ui.end_row();
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([48.0, 40.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::RetourArriere => self.retour_arriere(),
                Action::EffacerTout => self.effacer_tout(),
                Action::Calculer => self.calculer_via_noyau(),
            }
            self.focus_affichage = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str) {
        let resp = ui.add_sized([48.0, 40.0], egui::Button::new(label));
        if resp.clicked() {
            self.pousser(label);
        }
    }

    /// Évalue le tampon via le noyau, puis remplace l’affichage par le
    /// résultat formaté, ou par le jeton d’erreur.
    fn calculer_via_noyau(&mut self) {
        let s = self.affichage.trim();
        if s.is_empty() {
            self.poser_erreur();
            return;
        }

        match crate::noyau::evaluer_expression(s) {
            Ok(texte) => self.poser_resultat(texte),
            Err(_) => self.poser_erreur(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    RetourArriere,
    EffacerTout,
    Calculer,
}
