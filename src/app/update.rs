// SPDX-License-Identifier: MPL-2.0
//! Update logic and effect handling for the application.
//!
//! The gallery state machine is synchronous; every [`Effect`] it returns is
//! turned into an iced [`Task`] here.

use super::{App, Message, Mounted};
use crate::error::HttpError;
use crate::gallery::{self, Effect};
use crate::source::{BatchRequest, Client};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => handle_gallery(app, message),
        Message::Tick(_) => handle_gallery(app, gallery::Message::SpinnerTick),
        Message::WindowCloseRequested(id) => {
            tracing::info!(?id, "close requested");
            if let Some(mounted) = app.gallery.take() {
                mounted.unmount();
            }
            iced::exit()
        }
    }
}

fn handle_gallery(app: &mut App, message: gallery::Message) -> Task<Message> {
    let Some(mounted) = app.gallery.as_mut() else {
        tracing::debug!(?message, "gallery is unmounted, dropping message");
        return Task::none();
    };

    let effect = mounted.state.handle(message);
    perform_effect(mounted, app.client.as_ref(), effect)
}

/// Runs an effect requested by the gallery.
pub(super) fn perform_effect(
    mounted: &mut Mounted,
    client: Option<&Client>,
    effect: Effect,
) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Fetch(request) => fetch_batch(client, request),
        Effect::ScheduleSearch { token, delay } => {
            // The sleep is created on first poll, inside the runtime.
            let timer = async move { tokio::time::sleep(delay).await };
            let (task, handle) = Task::perform(timer, move |()| {
                Message::Gallery(gallery::Message::SearchDebounced(token))
            })
            .abortable();

            // Dropping the previous handle aborts the previous timer.
            mounted.debounce_timer = Some(handle.abort_on_drop());
            task
        }
    }
}

fn fetch_batch(client: Option<&Client>, request: BatchRequest) -> Task<Message> {
    let Some(client) = client.cloned() else {
        return Task::done(Message::Gallery(gallery::Message::BatchFetched {
            request,
            result: Err(HttpError::ClientUnavailable.into()),
        }));
    };

    Task::perform(client.fetch_batch(request.clone()), move |result| {
        Message::Gallery(gallery::Message::BatchFetched { request, result })
    })
}
