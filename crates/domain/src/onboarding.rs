//! Onboarding steps: resend cooldowns, passcode entry, masked addresses.

use crate::fields::EchoedText;

/// Cooldown after an OTP or verification link is sent, in seconds
pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const PASSCODE_LENGTH: usize = 4;

/// Resend button state: a simulated send followed by a one-second countdown.
///
/// Every `start` opens a new run; ticks from an older run are ignored, so a
/// restart never makes two loops count down the same timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResendTimer {
    remaining: u32,
    sending: bool,
    run: u64,
}

impl ResendTimer {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn can_resend(&self) -> bool {
        !self.sending && self.remaining == 0
    }

    /// Restart the countdown. Tick with the returned run id once a second.
    pub fn start(&mut self) -> u64 {
        self.run = self.run.wrapping_add(1);
        self.remaining = RESEND_COOLDOWN_SECS;
        self.run
    }

    /// One second passed. Returns false when `run` should stop ticking.
    pub fn tick(&mut self, run: u64) -> bool {
        if run != self.run || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining > 0
    }

    /// Returns false while a send is in flight or the cooldown runs.
    pub fn begin_send(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.sending = true;
        true
    }

    /// The send finished; the cooldown starts.
    pub fn finish_send(&mut self) -> u64 {
        self.sending = false;
        self.start()
    }

    /// Drop any countdown, e.g. when leaving the step.
    pub fn reset(&mut self) {
        self.run = self.run.wrapping_add(1);
        self.remaining = 0;
        self.sending = false;
    }

    /// Label for a resend button reading `idle` when ready.
    pub fn label(&self, idle: &str) -> String {
        if self.sending {
            "Sending...".to_string()
        } else if self.remaining > 0 {
            format!("Resend ({}s)", self.remaining)
        } else {
            idle.to_string()
        }
    }
}

/// Keep the first two characters before the last `@`, star out the rest of
/// the local part. Addresses too short to mask come back unchanged.
pub fn mask_email(email: &str) -> String {
    let Some(at) = email.rfind('@') else {
        return email.to_string();
    };
    let head: String = email[..at].chars().take(2).collect();
    if head.chars().count() < 2 {
        return email.to_string();
    }
    format!("{head}*****{}", &email[at..])
}

/// One row of single-digit boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasscodeEntry {
    boxes: [EchoedText; PASSCODE_LENGTH],
}

impl PasscodeEntry {
    /// Text the box at `index` renders.
    pub fn shown(&self, index: usize) -> &str {
        self.boxes.get(index).map(EchoedText::shown).unwrap_or_default()
    }

    /// Keep the first digit typed into box `index`. Returns the box to focus
    /// next when a digit landed before the last box.
    pub fn input(&mut self, index: usize, raw: &str) -> Option<usize> {
        let digit: String = raw.chars().filter(char::is_ascii_digit).take(1).collect();
        let slot = self.boxes.get_mut(index)?;
        slot.on_edit(raw, &digit);
        (!digit.is_empty() && index + 1 < PASSCODE_LENGTH).then_some(index + 1)
    }

    /// Backspace in box `index`: an empty box hands focus back one box.
    pub fn backspace(&self, index: usize) -> Option<usize> {
        let empty = self.boxes.get(index).is_some_and(|b| b.value().is_empty());
        (empty && index > 0).then(|| index - 1)
    }

    pub fn needs_settle(&self) -> bool {
        self.boxes.iter().any(EchoedText::needs_settle)
    }

    pub fn settle(&mut self) {
        for slot in &mut self.boxes {
            slot.settle();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.boxes.iter().all(|b| !b.value().is_empty())
    }

    pub fn code(&self) -> String {
        self.boxes.iter().map(EchoedText::value).collect()
    }

    pub fn clear(&mut self) {
        for slot in &mut self.boxes {
            slot.sync("");
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasscodeStep {
    #[default]
    Set,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasscodeOutcome {
    /// First entry accepted; the confirm step starts.
    Confirming,
    /// Confirmation differed and was cleared.
    Mismatch,
    Matched(String),
}

/// Set, then confirm, a passcode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasscodeFlow {
    step: PasscodeStep,
    first: PasscodeEntry,
    confirm: PasscodeEntry,
}

impl PasscodeFlow {
    pub fn step(&self) -> PasscodeStep {
        self.step
    }

    pub fn active(&self) -> &PasscodeEntry {
        match self.step {
            PasscodeStep::Set => &self.first,
            PasscodeStep::Confirm => &self.confirm,
        }
    }

    pub fn active_mut(&mut self) -> &mut PasscodeEntry {
        match self.step {
            PasscodeStep::Set => &mut self.first,
            PasscodeStep::Confirm => &mut self.confirm,
        }
    }

    /// Advance. `None` while the active row has an empty box.
    pub fn next(&mut self) -> Option<PasscodeOutcome> {
        if !self.active().is_complete() {
            return None;
        }
        match self.step {
            PasscodeStep::Set => {
                self.step = PasscodeStep::Confirm;
                Some(PasscodeOutcome::Confirming)
            }
            PasscodeStep::Confirm if self.first.code() == self.confirm.code() => {
                Some(PasscodeOutcome::Matched(self.first.code()))
            }
            PasscodeStep::Confirm => {
                self.confirm.clear();
                Some(PasscodeOutcome::Mismatch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> PasscodeEntry {
        let mut entry = PasscodeEntry::default();
        for (i, c) in code.chars().enumerate() {
            entry.input(i, &c.to_string());
        }
        entry
    }

    #[test]
    fn test_resend_label_follows_state() {
        let mut timer = ResendTimer::default();
        assert_eq!(timer.label("Resend"), "Resend");
        assert!(timer.begin_send());
        assert_eq!(timer.label("Resend link"), "Sending...");
        assert!(!timer.begin_send());

        let run = timer.finish_send();
        assert_eq!(timer.label("Resend"), "Resend (60s)");
        assert!(!timer.can_resend());
        assert!(timer.tick(run));
        assert_eq!(timer.remaining(), 59);
    }

    #[test]
    fn test_countdown_runs_out() {
        let mut timer = ResendTimer::default();
        let run = timer.start();
        let mut ticks = 1;
        while timer.tick(run) {
            ticks += 1;
        }
        assert_eq!(ticks, RESEND_COOLDOWN_SECS);
        assert!(timer.can_resend());
        assert!(!timer.tick(run));
    }

    #[test]
    fn test_restart_retires_old_run() {
        let mut timer = ResendTimer::default();
        let old = timer.start();
        timer.tick(old);
        let new = timer.start();
        assert!(!timer.tick(old));
        assert_eq!(timer.remaining(), RESEND_COOLDOWN_SECS);
        assert!(timer.tick(new));

        timer.reset();
        assert!(!timer.tick(new));
        assert!(timer.can_resend());
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("kskj@p.com"), "ks*****@p.com");
        assert_eq!(mask_email("lok.min@example.com"), "lo*****@example.com");
        assert_eq!(mask_email("a@b.com"), "a@b.com");
        assert_eq!(mask_email("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_passcode_box_takes_one_digit_and_advances() {
        let mut entry = PasscodeEntry::default();
        assert_eq!(entry.input(0, "7"), Some(1));
        assert_eq!(entry.input(1, "x"), None);
        assert_eq!(entry.shown(1), "x");
        entry.settle();
        assert_eq!(entry.shown(1), "");
        assert_eq!(entry.input(3, "9"), None);
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_backspace_on_empty_box_moves_back() {
        let entry = filled("12");
        assert_eq!(entry.backspace(1), None);
        assert_eq!(entry.backspace(2), Some(1));
        assert_eq!(entry.backspace(0), None);
    }

    #[test]
    fn test_flow_confirms_matching_code() {
        let mut flow = PasscodeFlow::default();
        assert_eq!(flow.next(), None);
        *flow.active_mut() = filled("1234");
        assert_eq!(flow.next(), Some(PasscodeOutcome::Confirming));
        assert_eq!(flow.step(), PasscodeStep::Confirm);
        assert!(!flow.active().is_complete());

        *flow.active_mut() = filled("1234");
        assert_eq!(flow.next(), Some(PasscodeOutcome::Matched("1234".into())));
    }

    #[test]
    fn test_flow_mismatch_clears_confirmation() {
        let mut flow = PasscodeFlow::default();
        *flow.active_mut() = filled("1234");
        flow.next();
        *flow.active_mut() = filled("4321");
        assert_eq!(flow.next(), Some(PasscodeOutcome::Mismatch));
        assert_eq!(flow.active().code(), "");
        assert_eq!(flow.step(), PasscodeStep::Confirm);
    }
}
