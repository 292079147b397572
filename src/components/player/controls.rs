//! On-screen controls overlay: shown on activity, hidden after a fixed delay
//! unless locked. A pending hide timer is identified by an epoch counter;
//! arming bumps the epoch, so a superseded timer finds a stale epoch when it
//! fires and does nothing. At most one epoch is live at a time.

use crate::components::player::PlayerCommand;
use crate::components::Icon;
use dioxus::prelude::*;

/// Delay before visible controls hide again.
pub const HIDE_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsState {
    visible: bool,
    locked: bool,
    hide_epoch: u64,
    armed: bool,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlsState {
    pub fn new() -> Self {
        Self {
            visible: false,
            locked: false,
            hide_epoch: 0,
            armed: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Make the controls visible and return the epoch to arm a hide timer
    /// for. Supersedes any pending timer. No-op while locked.
    pub fn show(&mut self) -> Option<u64> {
        if self.locked {
            return None;
        }
        self.visible = true;
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        self.armed = true;
        Some(self.hide_epoch)
    }

    /// Hide immediately. No-op while locked; idempotent when already hidden.
    pub fn hide(&mut self) {
        if !self.locked {
            self.visible = false;
        }
    }

    /// Force the controls visible and suppress auto-hide until `unlock`.
    pub fn lock(&mut self) {
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        self.armed = false;
        self.visible = true;
        self.locked = true;
    }

    /// Re-enable auto-hide; the controls stay visible until the returned
    /// epoch's timer fires.
    pub fn unlock(&mut self) -> u64 {
        self.locked = false;
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        self.armed = true;
        self.hide_epoch
    }

    /// A hide timer fired. Only the timer for the current epoch may hide.
    pub fn on_hide_timeout(&mut self, epoch: u64) {
        if epoch != self.hide_epoch || !self.armed {
            return;
        }
        self.armed = false;
        if !self.locked {
            self.visible = false;
        }
    }
}

fn arm_hide_timer(mut controls: Signal<ControlsState>, epoch: u64) {
    spawn(async move {
        crate::components::delay_ms(HIDE_DELAY_MS as u64).await;
        controls.write().on_hide_timeout(epoch);
    });
}

/// Show the controls and schedule their auto-hide. Wire this to activity
/// events on the player surface.
pub fn show_controls(mut controls: Signal<ControlsState>) {
    let epoch = controls.write().show();
    if let Some(epoch) = epoch {
        arm_hide_timer(controls, epoch);
    }
}

#[component]
pub fn ControlsOverlay(title: String) -> Element {
    let mut controls = use_context::<Signal<ControlsState>>();
    let commands = use_coroutine_handle::<PlayerCommand>();

    let state = controls();
    let hidden_class = if state.visible() { "" } else { "controls-hidden" };
    let lock_icon = if state.locked() { "lock" } else { "unlock" };

    let on_lock_toggle = move |_| {
        let locked = controls.peek().locked();
        if locked {
            let epoch = controls.write().unlock();
            arm_hide_timer(controls, epoch);
        } else {
            controls.write().lock();
        }
    };

    rsx! {
        div { class: "controls-overlay {hidden_class} absolute inset-x-0 bottom-0 z-20 flex items-center gap-3 bg-zinc-950/80 px-4 py-3 backdrop-blur",
            p { class: "flex-1 truncate text-sm text-zinc-200", "{title}" }
            button {
                class: "rounded-lg p-2 text-zinc-400 hover:text-white",
                title: if state.locked() { "Unlock controls" } else { "Keep controls visible" },
                onclick: on_lock_toggle,
                Icon { name: lock_icon.to_string(), class: "w-4 h-4".to_string() }
            }
            button {
                class: "rounded-lg p-2 text-zinc-400 hover:text-white",
                title: "Stop",
                onclick: move |_| commands.send(PlayerCommand::Stop),
                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_unlocked() {
        let state = ControlsState::new();
        assert!(!state.visible());
        assert!(!state.locked());
    }

    #[test]
    fn show_arms_and_timeout_hides() {
        let mut state = ControlsState::new();
        let epoch = state.show().expect("show arms a timer");
        assert!(state.visible());

        state.on_hide_timeout(epoch);
        assert!(!state.visible());
    }

    #[test]
    fn second_show_supersedes_first_timer() {
        let mut state = ControlsState::new();
        let first = state.show().unwrap();
        let second = state.show().unwrap();
        assert_ne!(first, second);

        // The superseded timer fires and must not hide anything.
        state.on_hide_timeout(first);
        assert!(state.visible());

        // Only the second timer hides, exactly once.
        state.on_hide_timeout(second);
        assert!(!state.visible());
        state.on_hide_timeout(second);
        assert!(!state.visible());
    }

    #[test]
    fn locked_controls_ignore_show_and_hide() {
        let mut state = ControlsState::new();
        state.lock();
        assert!(state.visible());
        assert!(state.locked());

        assert_eq!(state.show(), None);
        state.hide();
        state.hide();
        assert!(state.visible());
        assert!(state.locked());
    }

    #[test]
    fn lock_cancels_pending_hide() {
        let mut state = ControlsState::new();
        let epoch = state.show().unwrap();
        state.lock();

        state.on_hide_timeout(epoch);
        assert!(state.visible());
    }

    #[test]
    fn unlock_rearms_auto_hide() {
        let mut state = ControlsState::new();
        state.lock();
        let epoch = state.unlock();

        // Visible until the new timer fires.
        assert!(state.visible());
        assert!(!state.locked());
        state.on_hide_timeout(epoch);
        assert!(!state.visible());
    }

    #[test]
    fn hide_is_idempotent() {
        let mut state = ControlsState::new();
        state.hide();
        assert!(!state.visible());
        state.show();
        state.hide();
        state.hide();
        assert!(!state.visible());
    }
}
