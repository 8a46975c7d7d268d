//! Host hooks the border plugin listens on.

/// Points in the host's lifecycle the plugin can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// The context menu is being built from its default item list.
    AfterContextMenuDefaultOptions,
    /// The host grid finished its own initialization.
    AfterInit,
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    hook: Hook,
    once: bool,
}

/// Hooks currently registered by a plugin instance.
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    registrations: Vec<Registration>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Hook) {
        self.add(Registration { hook, once: false });
    }

    /// Register a hook that is dropped after it first fires.
    pub fn register_once(&mut self, hook: Hook) {
        self.add(Registration { hook, once: true });
    }

    pub fn is_registered(&self, hook: Hook) -> bool {
        self.registrations.iter().any(|r| r.hook == hook)
    }

    /// Fire `hook`: returns whether it was registered, unregistering one-shot hooks.
    pub fn fire(&mut self, hook: Hook) -> bool {
        match self.registrations.iter().position(|r| r.hook == hook) {
            Some(idx) => {
                if self.registrations[idx].once {
                    self.registrations.remove(idx);
                }
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    fn add(&mut self, registration: Registration) {
        self.registrations.retain(|r| r.hook != registration.hook);
        self.registrations.push(registration);
    }
}
