// Transport boundary between the game state machine and whoever sits at the
// table (network sessions, terminals, bots). The game never touches sockets or
// stdin itself; it asks a `Transport` for moves and tells it what happened.

use crate::moves::{MoveReply, MoveRequest};
use crate::notify::Notification;

pub trait Transport {
    /// Ask `player` for a move and block until it arrives or the player is gone.
    fn request_move(&mut self, player: &str, request: &MoveRequest) -> MoveReply;

    /// Deliver a message to one player. Delivery failures are the transport's business.
    fn notify(&mut self, player: &str, notification: &Notification);

    /// Deliver the same message to every listed player.
    fn broadcast(&mut self, players: &[&str], notification: &Notification) {
        for player in players {
            self.notify(player, notification);
        }
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn request_move(&mut self, player: &str, request: &MoveRequest) -> MoveReply {
        (**self).request_move(player, request)
    }

    fn notify(&mut self, player: &str, notification: &Notification) {
        (**self).notify(player, notification)
    }

    fn broadcast(&mut self, players: &[&str], notification: &Notification) {
        (**self).broadcast(players, notification)
    }
}
