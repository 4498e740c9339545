pub struct RunArgs {
    /// Pause for an Enter keypress before exiting, so the terminal window
    /// stays open when the launcher is started by double-click.
    pub interactive: bool,
}
