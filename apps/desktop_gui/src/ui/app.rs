use std::time::Duration;

use client_core::{FormMode, SubmitTarget, View, ViewController};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use eframe::egui;
use shared::{domain::ContactId, protocol::Contact};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{MutationKind, UiEvent};

/// Row-level action picked inside the list table. Deferred out of the grid
/// closure so the controller is not mutated while its snapshot is rendered.
enum RowAction {
    View(Contact),
    Edit(Contact),
    Delete(ContactId),
}

pub struct ContactsApp {
    controller: ViewController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    saving: bool,
}

impl ContactsApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            controller: ViewController::new(),
            cmd_tx,
            ui_rx,
            saving: false,
        }
    }

    fn send(&self, cmd: BackendCommand) -> bool {
        match self.cmd_tx.try_send(cmd) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("backend command queue full; dropping command");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("backend worker is gone");
                false
            }
        }
    }

    fn request_reload(&mut self) {
        let ticket = self.controller.begin_reload();
        if !self.send(BackendCommand::LoadContacts { ticket }) {
            self.controller.reload_failed(ticket, "backend worker unavailable");
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BackendReady => {
                    // Mount-time fetch.
                    self.request_reload();
                }
                UiEvent::ContactsLoaded { ticket, result } => match result {
                    Ok(contacts) => {
                        self.controller.apply_snapshot(ticket, contacts);
                    }
                    Err(message) => self.controller.reload_failed(ticket, &message),
                },
                UiEvent::MutationFinished { kind, result } => {
                    self.saving = false;
                    match (kind, result) {
                        (MutationKind::Delete, Ok(())) => {}
                        (MutationKind::Delete, Err(message)) => {
                            self.controller.delete_failed(&message);
                        }
                        (_, Ok(())) => self.controller.submit_succeeded(),
                        (_, Err(message)) => self.controller.submit_failed(&message),
                    }
                    // Every mutation ends with a fresh snapshot, success or not.
                    self.request_reload();
                }
            }
        }
    }

    fn banner_ui(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.controller.notice().map(str::to_owned) else {
            return;
        };
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), message);
            if ui.small_button("Dismiss").clicked() {
                self.controller.clear_notice();
            }
        });
        ui.separator();
    }

    fn list_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("View Contacts");
        if self.controller.is_loading() {
            ui.label("Loading...");
            return;
        }

        let contacts = self.controller.contacts().to_vec();
        let mut pending: Option<RowAction> = None;
        egui::Grid::new("contact_table")
            .striped(true)
            .num_columns(5)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Phone");
                ui.strong("Work");
                ui.strong("Nick");
                ui.strong("Actions");
                ui.end_row();

                for contact in &contacts {
                    ui.horizontal(|ui| {
                        let initial = contact
                            .name
                            .chars()
                            .next()
                            .map(|c| c.to_uppercase().to_string())
                            .unwrap_or_default();
                        ui.label(egui::RichText::new(initial).strong().size(18.0));
                        ui.vertical(|ui| {
                            ui.strong(&contact.name);
                            ui.weak(&contact.email);
                        });
                    });
                    ui.label(&contact.phone);
                    ui.label(&contact.work);
                    ui.label(&contact.nick);
                    ui.horizontal(|ui| {
                        if ui.button("View").clicked() {
                            pending = Some(RowAction::View(contact.clone()));
                        }
                        if ui.button("Edit").clicked() {
                            pending = Some(RowAction::Edit(contact.clone()));
                        }
                        if ui.button("Delete").clicked() {
                            pending = Some(RowAction::Delete(contact.id.clone()));
                        }
                    });
                    ui.end_row();
                }
            });

        match pending {
            Some(RowAction::View(contact)) => self.controller.show_detail(contact),
            Some(RowAction::Edit(contact)) => self.controller.start_edit(contact),
            Some(RowAction::Delete(id)) => {
                // No confirmation and no optimistic removal; the row stays
                // until the follow-up reload lands.
                self.send(BackendCommand::DeleteContact { id });
            }
            None => {}
        }
    }

    fn form_ui(&mut self, ui: &mut egui::Ui, mode: FormMode) {
        let (title, submit_label) = match mode {
            FormMode::Add => ("Add Contact", "Add Contact"),
            FormMode::Edit => ("Edit Contact", "Update Contact"),
        };
        ui.heading(title);

        {
            let draft = self.controller.draft_mut();
            ui.add(egui::TextEdit::singleline(&mut draft.name).hint_text("Full Name"));
            ui.add(egui::TextEdit::singleline(&mut draft.email).hint_text("Email"));
            ui.add(egui::TextEdit::singleline(&mut draft.phone).hint_text("Phone"));
            ui.add(egui::TextEdit::singleline(&mut draft.work).hint_text("Work"));
            ui.add(egui::TextEdit::singleline(&mut draft.nick).hint_text("Nick Name"));
        }

        if ui
            .add_enabled(!self.saving, egui::Button::new(submit_label))
            .clicked()
        {
            match self.controller.submit_target() {
                Ok(SubmitTarget::Create(draft)) => {
                    self.saving = self.send(BackendCommand::CreateContact { draft });
                }
                Ok(SubmitTarget::Update(id, draft)) => {
                    self.saving = self.send(BackendCommand::UpdateContact { id, draft });
                }
                Err(err) => self.controller.submit_failed(&err.to_string()),
            }
        }
    }

    fn detail_ui(&mut self, ui: &mut egui::Ui) {
        let Some(contact) = self.controller.selection().cloned() else {
            self.controller.show_list();
            return;
        };
        ui.heading(format!("{}'s Profile", contact.name));
        ui.label(format!("Email: {}", contact.email));
        ui.label(format!("Phone: {}", contact.phone));
        ui.label(format!("Work: {}", contact.work));
        ui.label(format!("Nick: {}", contact.nick));
        if ui.button("Back").clicked() {
            self.controller.show_list();
        }
    }
}

impl eframe::App for ContactsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::SidePanel::left("sidebar").show(ctx, |ui| {
            ui.heading("Contacts");
            ui.separator();
            if ui.button("View Contacts").clicked() {
                self.controller.show_list();
                self.request_reload();
            }
            if ui.button("Add Contact").clicked() {
                self.controller.start_add();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.banner_ui(ui);
            match self.controller.view() {
                View::List => self.list_ui(ui),
                View::Form(mode) => self.form_ui(ui, mode),
                View::Detail => self.detail_ui(ui),
            }
        });

        // Keep polling the event channel while idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
