//! Backend worker: owns the tokio runtime and the HTTP contact store. The
//! UI thread never blocks on the network; every outcome travels back as a
//! `UiEvent`.

use std::thread;

use client_core::{ContactStore, HttpContactStore};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{MutationKind, UiEvent};

pub fn start_backend_bridge(
    server_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let store = HttpContactStore::new(server_url);
            let _ = ui_tx.send(UiEvent::BackendReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadContacts { ticket } => {
                        let result = store.list().await.map_err(|err| err.to_string());
                        let _ = ui_tx.send(UiEvent::ContactsLoaded { ticket, result });
                    }
                    BackendCommand::CreateContact { draft } => {
                        let result = store.create(&draft).await.map_err(|err| err.to_string());
                        let _ = ui_tx.send(UiEvent::MutationFinished {
                            kind: MutationKind::Create,
                            result,
                        });
                    }
                    BackendCommand::UpdateContact { id, draft } => {
                        let result = store
                            .update(&id, &draft)
                            .await
                            .map_err(|err| err.to_string());
                        let _ = ui_tx.send(UiEvent::MutationFinished {
                            kind: MutationKind::Update,
                            result,
                        });
                    }
                    BackendCommand::DeleteContact { id } => {
                        let result = store.delete(&id).await.map_err(|err| err.to_string());
                        let _ = ui_tx.send(UiEvent::MutationFinished {
                            kind: MutationKind::Delete,
                            result,
                        });
                    }
                }
            }
        });
    });
}
