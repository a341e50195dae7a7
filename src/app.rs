use crate::client::{AddressDetails, BlockDetails, ExplorerClient, TxDetails, TxSummary};
use crate::config::Config;
use tui_input::Input;

/// Transactions shown on the block screen; the remainder is summarized as a count
pub const BLOCK_TX_DISPLAY_LIMIT: usize = 10;

/// Transactions previewed per block on the home screen
pub const HOME_TX_PREVIEW: usize = 5;

#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    Loading(String),
    BlockResult(BlockResult),
    TxResult(TxResult),
    AddressResult(AddressResult),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct BlockResult {
    pub details: BlockDetails,
    pub selected_index: usize,
    pub list_mode: bool, // true = tx list, false = info links
}

impl BlockResult {
    /// The slice of transactions actually rendered
    pub fn visible_transactions(&self) -> &[TxSummary] {
        let shown = self.details.transactions.len().min(BLOCK_TX_DISPLAY_LIMIT);
        &self.details.transactions[..shown]
    }

    /// Transactions beyond the display limit
    pub fn hidden_tx_count(&self) -> usize {
        self.details
            .transactions
            .len()
            .saturating_sub(BLOCK_TX_DISPLAY_LIMIT)
    }
}

#[derive(Debug, Clone)]
pub struct TxResult {
    pub details: TxDetails,
    pub selected_link: usize, // 0 = from, then to, then block
}

#[derive(Debug, Clone)]
pub struct AddressResult {
    pub details: AddressDetails,
    pub selected_index: usize, // row in the transfer feed
}

/// Navigable links from a screen
#[derive(Debug, Clone)]
pub enum NavLink {
    Address(String),
    Block(u64),
    Transaction(String),
}

pub struct App {
    pub config: Config,
    pub screen: Screen,
    pub history: Vec<Screen>,
    pub search_input: Input,
    pub key_input: Input,
    pub selected_history_index: Option<usize>,
    pub should_quit: bool,
    pub client: Option<ExplorerClient>,
    /// Latest blocks shown on the home screen, once fetched
    pub latest_blocks: Option<Vec<BlockDetails>>,
    pub home_error: Option<String>,
    /// Generation counter for in-flight fetches; results from a stale
    /// generation are discarded so a slow response can never overwrite a
    /// screen the user has already left
    request_seq: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        let client = config
            .endpoint_url()
            .and_then(|url| ExplorerClient::new(&url).ok());

        Self {
            config,
            screen: Screen::Home,
            history: Vec::new(),
            search_input: Input::default(),
            key_input: Input::default(),
            selected_history_index: None,
            should_quit: false,
            client,
            latest_blocks: None,
            home_error: None,
            request_seq: 0,
        }
    }

    /// Start a new fetch generation; the returned token travels with the
    /// spawned task and must match when its result arrives
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    pub fn is_current_request(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Drop any in-flight fetch without starting a new one
    pub fn cancel_requests(&mut self) {
        self.request_seq += 1;
    }

    pub fn submit_api_key(&mut self) -> Result<(), String> {
        let key = self.key_input.value().trim().to_string();
        if key.is_empty() {
            return Err("API key cannot be empty".to_string());
        }

        if let Err(e) = self.config.set_api_key(key) {
            return Err(format!("Failed to save API key: {e:#}"));
        }

        // endpoint_url is always Some once a key is set
        let url = match self.config.endpoint_url() {
            Some(url) => url,
            None => return Err("No endpoint for configured network".to_string()),
        };

        match ExplorerClient::new(&url) {
            Ok(client) => {
                self.client = Some(client);
                self.key_input.reset();
                Ok(())
            }
            Err(e) => Err(format!("Invalid endpoint: {e:#}")),
        }
    }

    pub fn needs_setup(&self) -> bool {
        self.client.is_none()
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    pub fn get_recent_searches(&self) -> &[String] {
        &self.config.recent_searches
    }

    pub fn select_history_prev(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(0) => None, // Wrap to search input
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_history_next(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to search input
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_history_query(&self) -> Option<String> {
        self.selected_history_index
            .and_then(|i| self.config.recent_searches.get(i).cloned())
    }

    pub fn clear_history_selection(&mut self) {
        self.selected_history_index = None;
    }

    pub fn delete_selected_history(&mut self) {
        if let Some(idx) = self.selected_history_index {
            if idx < self.config.recent_searches.len() {
                self.config.recent_searches.remove(idx);
                let _ = self.config.save();

                // Adjust selection
                if self.config.recent_searches.is_empty() {
                    self.selected_history_index = None;
                } else if idx >= self.config.recent_searches.len() {
                    self.selected_history_index = Some(self.config.recent_searches.len() - 1);
                }
            }
        }
    }

    pub fn submit_search(&mut self) -> Option<String> {
        let value = self.search_input.value();
        if value.trim().is_empty() {
            return None;
        }

        let query = value.to_string();
        self.search_input.reset();
        let _ = self.config.add_recent_search(query.clone());
        Some(query)
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        if !matches!(self.screen, Screen::Home | Screen::Loading(_)) {
            self.history.push(self.screen.clone());
        }
        self.screen = screen;
    }

    pub fn go_back(&mut self) {
        self.cancel_requests();
        if let Some(prev) = self.history.pop() {
            self.screen = prev;
        } else {
            self.go_home();
        }
    }

    pub fn go_home(&mut self) {
        self.cancel_requests();
        self.history.clear();
        self.screen = Screen::Home;
    }

    pub fn set_loading(&mut self, msg: &str) {
        // Save current screen to history before showing loading (if it's a navigable screen)
        if !matches!(
            self.screen,
            Screen::Home | Screen::Loading(_) | Screen::Error(_)
        ) {
            self.history.push(self.screen.clone());
        }
        self.screen = Screen::Loading(msg.to_string());
    }

    pub fn set_error(&mut self, msg: String) {
        if !matches!(
            self.screen,
            Screen::Home | Screen::Loading(_) | Screen::Error(_)
        ) {
            self.history.push(self.screen.clone());
        }
        self.screen = Screen::Error(msg);
    }

    pub fn set_block_result(&mut self, details: BlockDetails) {
        self.navigate_to(Screen::BlockResult(BlockResult {
            details,
            selected_index: 0,
            list_mode: true,
        }));
    }

    pub fn set_tx_result(&mut self, details: TxDetails) {
        self.navigate_to(Screen::TxResult(TxResult {
            details,
            selected_link: 0,
        }));
    }

    pub fn set_address_result(&mut self, details: AddressDetails) {
        self.navigate_to(Screen::AddressResult(AddressResult {
            details,
            selected_index: 0,
        }));
    }

    pub fn set_home_blocks(&mut self, blocks: Vec<BlockDetails>) {
        self.home_error = None;
        self.latest_blocks = Some(blocks);
    }

    pub fn set_home_error(&mut self, msg: String) {
        self.latest_blocks = None;
        self.home_error = Some(msg);
    }

    pub fn is_on_home(&self) -> bool {
        matches!(self.screen, Screen::Home)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading(_))
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        match &mut self.screen {
            Screen::BlockResult(result) => {
                if result.list_mode && result.selected_index > 0 {
                    result.selected_index -= 1;
                }
            }
            Screen::TxResult(result) => {
                let max = result.details.link_count();
                if result.selected_link > 0 {
                    result.selected_link -= 1;
                } else if max > 0 {
                    result.selected_link = max - 1;
                }
            }
            Screen::AddressResult(result) => {
                if result.selected_index > 0 {
                    result.selected_index -= 1;
                }
            }
            _ => {}
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        match &mut self.screen {
            Screen::BlockResult(result) => {
                let shown = result.visible_transactions().len();
                if result.list_mode && shown > 0 && result.selected_index < shown - 1 {
                    result.selected_index += 1;
                }
            }
            Screen::TxResult(result) => {
                let max = result.details.link_count();
                if max > 0 {
                    result.selected_link = (result.selected_link + 1) % max;
                }
            }
            Screen::AddressResult(result) => {
                let len = result.details.transfers.len();
                if len > 0 && result.selected_index < len - 1 {
                    result.selected_index += 1;
                }
            }
            _ => {}
        }
    }

    /// Toggle between tx list and info links (for blocks)
    pub fn toggle_mode(&mut self) {
        if let Screen::BlockResult(result) = &mut self.screen {
            result.list_mode = !result.list_mode;
            result.selected_index = 0;
        }
    }

    /// Get the currently selected navigation link
    pub fn get_selected_link(&self) -> Option<NavLink> {
        match &self.screen {
            Screen::BlockResult(result) => {
                if result.list_mode {
                    result
                        .visible_transactions()
                        .get(result.selected_index)
                        .map(|tx| NavLink::Transaction(tx.hash.clone()))
                } else {
                    // Link to parent block
                    if result.details.info.number > 0 {
                        Some(NavLink::Block(result.details.info.number - 1))
                    } else {
                        None
                    }
                }
            }
            Screen::TxResult(result) => result
                .details
                .nav_links()
                .get(result.selected_link)
                .cloned(),
            Screen::AddressResult(result) => result
                .details
                .transfers
                .get(result.selected_index)
                .map(|t| NavLink::Transaction(t.hash.clone())),
            _ => None,
        }
    }
}

impl TxDetails {
    /// Links the tx screen exposes, in display order
    pub fn nav_links(&self) -> Vec<NavLink> {
        let mut links = vec![NavLink::Address(self.from.clone())];
        if let Some(to) = &self.to {
            links.push(NavLink::Address(to.clone()));
        }
        if let Some(block) = self.block_number {
            links.push(NavLink::Block(block));
        }
        links
    }

    pub fn link_count(&self) -> usize {
        1 + usize::from(self.to.is_some()) + usize::from(self.block_number.is_some())
    }
}
