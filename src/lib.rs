/*!
 * telegram-botclient - A thin blocking client for the Telegram Bot HTTP API
 *
 * Every operation is a single multipart POST to
 * `https://api.telegram.org/bot<token>/<method>` whose JSON reply is
 * normalized into an [`OperationResult`].
 *
 * ```no_run
 * use telegram_botclient::{BotClient, ChatAction};
 *
 * let bot = BotClient::new("YOUR_BOT_TOKEN")?;
 *
 * let result = bot.send_message(123456789i64, "Hello!", false)?;
 * println!("{}: {}", result.success, result.info);
 *
 * bot.send_chat_action(123456789i64, ChatAction::UploadPhoto)?;
 * bot.send_photo(123456789i64, "storage_plan.png", Some("Storage plan"))?;
 * bot.send_keyboard(123456789i64, "Pick one", [["A", "B"], ["C", "D"]])?;
 * # Ok::<(), telegram_botclient::Error>(())
 * ```
 */

pub mod chat_action;
pub mod client;
pub mod configuration;
pub mod error;
pub mod markup;
pub mod method;
pub mod response;

// Re-export main components for easy access
pub use chat_action::ChatAction;
pub use client::{BotClient, ChatId};
pub use configuration::{ClientOptions, Configuration};
pub use error::Error;
pub use markup::{KeyboardLayout, ReplyMarkup};
pub use method::Method;
pub use response::{ApiResponse, OperationResult};
