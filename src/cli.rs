/// The closed command surface of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    VipScan,
    RegularScan,
    Quit,
}

pub const MENU: &str = "1 - Simulate a VIP ticket scan.\n\
                        2 - Simulate a regular joe ticket scan.\n\
                        Q - End simulation.";

impl Command {
    // Нераспознанный ввод — None, цикл просто показывает меню снова
    pub fn parse(input: &str) -> Option<Command> {
        match input.trim() {
            "1" => Some(Command::VipScan),
            "2" => Some(Command::RegularScan),
            "q" | "Q" => Some(Command::Quit),
            _ => None,
        }
    }
}
