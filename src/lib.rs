//! WebAssembly match-3 engine for Coin Crush.
//!
//! Exports the board engine to JavaScript via wasm-bindgen. Boards are passed
//! as flat `Uint8Array` in row-major layout: `cells[row * size + col]`.
//! Every export takes a board and returns a new one; nothing is retained
//! between calls except inside a `Game` handle.

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hint;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod session;
pub mod types;

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use web_sys::console;
    use crate::config::EngineConfig;
    use crate::rng::{RandomSource, WasmRng};
    use crate::session::GameSession;
    use crate::types::{cell_count, to_row_col, Board};
    use crate::{board, catalog, hint, matcher, resolver};

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
    }

    fn log(msg: &str) {
        console::log_1(&JsValue::from_str(msg));
    }

    fn warn(msg: &str) {
        console::warn_1(&JsValue::from_str(msg));
    }

    /// Log a rejected call and turn the error into a JS exception.
    fn reject<E: std::fmt::Display>(err: E) -> JsError {
        let msg = err.to_string();
        warn(&msg);
        JsError::new(&msg)
    }

    /// A JS function such as `Math.random` used as the random source.
    struct JsRandom(js_sys::Function);

    impl RandomSource for JsRandom {
        fn next_unit(&mut self) -> f64 {
            self.0
                .call0(&JsValue::NULL)
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0)
        }
    }

    /// Run `f` with the caller's random function, or browser entropy if none was given.
    fn with_source<T>(
        rng: Option<js_sys::Function>,
        f: impl FnOnce(&mut dyn RandomSource) -> T,
    ) -> T {
        match rng {
            Some(func) => f(&mut JsRandom(func)),
            None => f(&mut WasmRng::new()),
        }
    }

    fn load_board(size: usize, cells: &[u8]) -> Result<Board, JsError> {
        Board::from_cells(size, cells.to_vec()).map_err(reject)
    }

    fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(value).map_err(reject)
    }

    fn board_array(board: &Board) -> js_sys::Uint8Array {
        let arr = js_sys::Uint8Array::new_with_length(board.len() as u32);
        arr.copy_from(board.cells());
        arr
    }

    /// Generate a board with no pre-existing matches.
    #[wasm_bindgen(js_name = "createBoard")]
    pub fn wasm_create_board(
        size: usize,
        kinds: Option<usize>,
        rng: Option<js_sys::Function>,
    ) -> Result<js_sys::Uint8Array, JsError> {
        let defaults = EngineConfig::default();
        let kinds = kinds.unwrap_or(defaults.kinds);
        let board = with_source(rng, |r| {
            board::create_board(size, kinds, defaults.max_draw_attempts, r)
        })
        .map_err(reject)?;
        Ok(board_array(&board))
    }

    /// Matched positions, sorted ascending.
    #[wasm_bindgen(js_name = "findMatches")]
    pub fn wasm_find_matches(size: usize, cells: &[u8]) -> Result<js_sys::Uint32Array, JsError> {
        let board = load_board(size, cells)?;
        let mut positions: Vec<u32> = matcher::find_matches(&board)
            .into_iter()
            .map(|p| p as u32)
            .collect();
        positions.sort_unstable();

        let arr = js_sys::Uint32Array::new_with_length(positions.len() as u32);
        arr.copy_from(&positions);
        Ok(arr)
    }

    /// Exchange two cells without validation beyond bounds.
    #[wasm_bindgen(js_name = "swapCells")]
    pub fn wasm_swap_cells(
        size: usize,
        cells: &[u8],
        a: usize,
        b: usize,
    ) -> Result<js_sys::Uint8Array, JsError> {
        let board = load_board(size, cells)?;
        let swapped = board::swap_cells(&board, a, b).map_err(reject)?;
        Ok(board_array(&swapped))
    }

    /// Clear and cascade until settled.
    /// Returns JS object: `{ board: { size, cells }, cleared, cascades }`
    #[wasm_bindgen(js_name = "resolveBoard")]
    pub fn wasm_resolve_board(
        size: usize,
        cells: &[u8],
        kinds: Option<usize>,
        rng: Option<js_sys::Function>,
    ) -> Result<JsValue, JsError> {
        let board = load_board(size, cells)?;
        let defaults = EngineConfig::default();
        let kinds = kinds.unwrap_or(defaults.kinds);
        let result = with_source(rng, |r| {
            resolver::resolve_board(&board, kinds, defaults.max_cascades, r)
        })
        .map_err(reject)?;
        to_js(&result)
    }

    #[wasm_bindgen(js_name = "hasAnyMoves")]
    pub fn wasm_has_any_moves(size: usize, cells: &[u8]) -> Result<bool, JsError> {
        let board = load_board(size, cells)?;
        let any = hint::has_any_moves(&board);
        if !any {
            log("no moves left on board");
        }
        Ok(any)
    }

    /// Returns `[a, b]` or `null`.
    #[wasm_bindgen(js_name = "findHint")]
    pub fn wasm_find_hint(size: usize, cells: &[u8]) -> Result<JsValue, JsError> {
        let board = load_board(size, cells)?;
        match hint::find_hint(&board) {
            Some(h) => to_js(&[h.a, h.b]),
            None => Ok(JsValue::NULL),
        }
    }

    /// Returns `{ row, col }`.
    #[wasm_bindgen(js_name = "positionToRowCol")]
    pub fn wasm_position_to_row_col(index: usize, size: usize) -> Result<JsValue, JsError> {
        let cells = cell_count(size).map_err(reject)?;
        if index >= cells {
            return Err(reject(crate::error::BoardError::PositionOutOfRange {
                position: index,
                cells,
            }));
        }
        let (row, col) = to_row_col(index, size);
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"row".into(), &(row as u32).into())
            .map_err(|_| JsError::new("failed to set row"))?;
        js_sys::Reflect::set(&obj, &"col".into(), &(col as u32).into())
            .map_err(|_| JsError::new("failed to set col"))?;
        Ok(obj.into())
    }

    /// Token descriptors `[{ id, name, image }]`, indexed by kind.
    #[wasm_bindgen(js_name = "tokenCatalog")]
    pub fn wasm_token_catalog() -> Result<JsValue, JsError> {
        to_js(&catalog::TOKENS)
    }

    /// A game in progress: board, selection and move stats.
    #[wasm_bindgen]
    pub struct Game {
        inner: GameSession<WasmRng>,
    }

    #[wasm_bindgen]
    impl Game {
        /// `config` is an optional `{ size, kinds, maxDrawAttempts, maxCascades }`.
        #[wasm_bindgen(constructor)]
        pub fn new(config: JsValue, seed: Option<f64>) -> Result<Game, JsError> {
            let config: EngineConfig = if config.is_undefined() || config.is_null() {
                EngineConfig::default()
            } else {
                serde_wasm_bindgen::from_value(config).map_err(reject)?
            };
            let rng = match seed {
                Some(seed) => WasmRng::from_seed(seed as u64),
                None => WasmRng::new(),
            };
            let inner = GameSession::new(config, rng).map_err(reject)?;
            Ok(Game { inner })
        }

        pub fn size(&self) -> usize {
            self.inner.config().size
        }

        pub fn cells(&self) -> js_sys::Uint8Array {
            board_array(self.inner.board())
        }

        /// Returns the click outcome, e.g. `{ kind: "resolved", cleared, cascades, noMoves }`.
        pub fn click(&mut self, index: usize) -> Result<JsValue, JsError> {
            let outcome = self.inner.click(index).map_err(reject)?;
            if let crate::session::ClickOutcome::Resolved { no_moves: true, .. } = outcome {
                log("no moves left after resolve");
            }
            to_js(&outcome)
        }

        /// Returns `[a, b]` or `null`.
        pub fn hint(&mut self) -> Result<JsValue, JsError> {
            match self.inner.hint() {
                Some(h) => to_js(&[h.a, h.b]),
                None => Ok(JsValue::NULL),
            }
        }

        pub fn reset(&mut self) -> Result<(), JsError> {
            self.inner.reset().map_err(reject)
        }

        pub fn shuffle(&mut self) -> Result<(), JsError> {
            self.inner.shuffle().map_err(reject)
        }

        pub fn phase(&self) -> Result<JsValue, JsError> {
            to_js(&self.inner.phase())
        }

        pub fn stats(&self) -> Result<JsValue, JsError> {
            to_js(&self.inner.stats())
        }

        #[wasm_bindgen(js_name = "noMoves")]
        pub fn no_moves(&self) -> bool {
            self.inner.no_moves()
        }
    }
}
