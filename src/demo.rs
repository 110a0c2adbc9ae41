/*!
 * Sample script used by `scenesmith demo` and the session's "use demo" action.
 */

/// Four-beat narrative about a filmmaker's vision coming to life.
pub const DEMO_SCRIPT: &str = "A lone filmmaker stands on a windswept cliff at sunrise, reading a note that says the world still believes in their vision. They inhale, overwhelmed, as gulls sweep overhead.

Cut to a bustling studio loft where the team powers on monitors, pinning mood boards that mirror the filmmaker’s dream. Coffee steam glows in the morning light while focus and excitement fill the air.

The filmmaker steps into the space and the crew shares a silent nod before cameras roll. Motion rigs glide, lights bloom, and the dream begins to take shape.

As the shoot wraps, the team gathers on the rooftop, watching a projection of their finished sequence against the twilight sky. They celebrate quietly, knowing the story will now reach the world.";
