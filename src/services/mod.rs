// Shelfmark services
// Services wrap external collaborators the card core never talks to directly.

pub mod api_client;
