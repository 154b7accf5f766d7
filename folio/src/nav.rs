use tracing::debug;

// scroll lock
//
// page scrolling is a single process-wide resource (the document body, in the browser).
// the navbar is the only thing allowed to hold it, and only while its mobile menu is
// open.  implementations should be cheap handles; the guard below owns one
pub trait ScrollLock: Clone {
    fn lock(&self);

    fn unlock(&self);
}

// holding a ScrollGuard means scrolling is locked.  dropping it releases the lock on
// every path out: closing the menu, navigating, or tearing down the navbar
#[derive(Debug)]
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        ScrollGuard { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub current_path: String,
    pub menu_open: bool,
}

// menu controller
//
// the navbar's interaction state.  current_path mirrors the router and is only ever
// written by navigate(); menu_open is owned here, and the scroll guard is held exactly
// when menu_open is true
#[derive(Debug)]
pub struct MenuController<L: ScrollLock> {
    state: NavState,
    lock: L,
    guard: Option<ScrollGuard<L>>,
}

impl<L: ScrollLock> MenuController<L> {
    pub fn new(current_path: impl Into<String>, lock: L) -> Self {
        MenuController {
            state: NavState {
                current_path: current_path.into(),
                menu_open: false,
            },
            lock,
            guard: None,
        }
    }

    #[cfg(test)]
    fn state(&self) -> &NavState {
        &self.state
    }

    #[cfg(test)]
    fn current_path(&self) -> &str {
        &self.state.current_path
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    #[cfg(test)]
    fn is_locked(&self) -> bool {
        self.guard.is_some()
    }

    pub fn toggle_menu(&mut self) {
        if self.state.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
        self.guard = None;
    }

    // a path change always closes the menu, even when the path is the same one
    // (clicking the link for the page you are already on)
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug!({ from = %self.state.current_path, to = %path }, "navbar observed navigation");

        self.state.current_path = path;
        self.close_menu();
    }

    fn open_menu(&mut self) {
        self.state.menu_open = true;
        if self.guard.is_none() {
            self.guard = Some(ScrollGuard::acquire(self.lock.clone()));
        }
    }
}
