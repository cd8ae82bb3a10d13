//! Implements InputPort. Inquire-based interactive session.
//!
//! Main menu: send message, add friend, list friends, HUD colour, quit.

use super::{hud, theme};
use crate::domain::{DomainError, HUD_COLORS, HudColor, Profile, recipient_from_label};
use crate::ports::InputPort;
use crate::usecases::{ChatService, ContactService, IdentityService};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::io::{Write, stdout};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    SendMessage,
    AddFriend,
    ListFriends,
    HudColor,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::SendMessage,
        MenuItem::AddFriend,
        MenuItem::ListFriends,
        MenuItem::HudColor,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MenuItem::SendMessage => "Saada sõnum",
            MenuItem::AddFriend => "Lisa sõber",
            MenuItem::ListFriends => "Sõbrad",
            MenuItem::HudColor => "HUD värv",
            MenuItem::Quit => "Välju",
        };
        f.write_str(s)
    }
}

/// Why a flow stopped early.
#[derive(Debug)]
enum Stop {
    /// Ctrl-C: leave the session.
    Quit,
    Failed(DomainError),
}

/// Esc becomes `None` (back to menu); Ctrl-C becomes `Stop::Quit`; anything else is a UI error.
fn answered<T>(res: Result<T, InquireError>) -> Result<Option<T>, Stop> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Err(Stop::Quit),
        Err(e) => Err(Stop::Failed(DomainError::Ui(e.to_string()))),
    }
}

fn print_colored(line: &str, rgb: (u8, u8, u8)) {
    let mut out = stdout();
    let (r, g, b) = rgb;
    let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
    let _ = out.execute(Print(line));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

fn print_error(line: &str) {
    print_colored(line, (0xff, 0x17, 0x44));
}

/// TUI adapter. Holds the services and the current HUD accent.
pub struct TuiInputPort {
    identity: Arc<IdentityService>,
    contacts: Arc<ContactService>,
    chat: Arc<ChatService>,
    accent: Mutex<HudColor>,
}

impl TuiInputPort {
    pub fn new(
        identity: Arc<IdentityService>,
        contacts: Arc<ContactService>,
        chat: Arc<ChatService>,
        accent: HudColor,
    ) -> Self {
        Self {
            identity,
            contacts,
            chat,
            accent: Mutex::new(accent),
        }
    }

    fn accent(&self) -> HudColor {
        self.accent
            .lock()
            .map(|a| *a)
            .unwrap_or(crate::domain::DEFAULT_HUD_COLOR)
    }

    /// Pick a friend, then send lines to them until an empty line or Esc.
    async fn send_flow(&self) -> Result<(), Stop> {
        let friends = self.contacts.load_contacts().await;
        if friends.is_empty() {
            print_colored("Sõbralist on tühi. Lisa enne sõber.", theme::TEXT_RGB);
            return Ok(());
        }
        let labels: Vec<String> = friends.iter().map(|c| c.label()).collect();
        let Some(label) = answered(Select::new("Kellele?", labels).prompt())? else {
            return Ok(());
        };
        let Some(recipient_id) = recipient_from_label(&label).map(str::to_string) else {
            return Ok(());
        };

        loop {
            let Some(text) = answered(
                Text::new("Sõnum:")
                    .with_help_message("tühi rida lõpetab")
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            if text.trim().is_empty() {
                return Ok(());
            }
            match self.chat.send_message(&recipient_id, &text).await {
                Ok(Some(line)) => print_colored(&line.to_string(), self.accent().rgb),
                Ok(None) => {}
                Err(e) => print_error(&format!("Saatmine ebaõnnestus: {}", e)),
            }
        }
    }

    async fn add_friend_flow(&self) -> Result<(), Stop> {
        let Some(name) = answered(Text::new("Nimi:").prompt())? else {
            return Ok(());
        };
        let Some(id) = answered(Text::new("Sõbra ID:").prompt())? else {
            return Ok(());
        };
        let Some(ip) = answered(Text::new("IP:").prompt())? else {
            return Ok(());
        };
        match self.contacts.add_contact(&name, &id, &ip).await {
            Ok(contact) => print_colored(&format!("Lisatud: {}", contact.label()), self.accent().rgb),
            Err(e) => print_error(&format!("Salvestamine ebaõnnestus: {}", e)),
        }
        Ok(())
    }

    async fn list_flow(&self) {
        let friends = self.contacts.load_contacts().await;
        if friends.is_empty() {
            print_colored("Sõbralist on tühi.", theme::TEXT_RGB);
        }
        for c in &friends {
            print_colored(&format!("  {}  {}", c.label(), c.ip), theme::TEXT_RGB);
        }
        let transcript = self.chat.transcript().await;
        if !transcript.is_empty() {
            print_colored(&format!("Saadetud sõnumeid: {}", transcript.len()), theme::TEXT_RGB);
        }
    }

    async fn dispatch(&self, item: MenuItem, profile: &Profile) -> Result<(), Stop> {
        match item {
            MenuItem::SendMessage => self.send_flow().await,
            MenuItem::AddFriend => self.add_friend_flow().await,
            MenuItem::ListFriends => {
                self.list_flow().await;
                Ok(())
            }
            MenuItem::HudColor => self.color_flow(profile),
            MenuItem::Quit => Err(Stop::Quit),
        }
    }

    fn color_flow(&self, profile: &Profile) -> Result<(), Stop> {
        let current = self.accent();
        let start = HUD_COLORS
            .iter()
            .position(|c| *c == current)
            .unwrap_or(0);
        let Some(choice) = answered(
            Select::new("HUD värv", HUD_COLORS.to_vec())
                .with_starting_cursor(start)
                .prompt(),
        )?
        else {
            return Ok(());
        };
        if let Ok(mut a) = self.accent.lock() {
            *a = choice;
        }
        theme::apply_theme(choice);
        hud::print_hud(profile, choice);
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let profile = self.identity.load_identity().await;
        hud::print_hud(&profile, self.accent());

        loop {
            // Bind first so the prompt is dropped before any await below.
            let picked = answered(Select::new("RovenChat", MenuItem::ALL.to_vec()).prompt());
            let step = match picked {
                Ok(Some(item)) => self.dispatch(item, &profile).await,
                // Esc on the main menu leaves too.
                Ok(None) | Err(Stop::Quit) => return Ok(()),
                Err(Stop::Failed(e)) => return Err(e),
            };
            match step {
                Ok(()) => {}
                Err(Stop::Quit) => return Ok(()),
                Err(Stop::Failed(e)) => return Err(e),
            }
        }
    }
}
