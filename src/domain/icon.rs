/// Identifies an icon without carrying how it is drawn.
///
/// `ui::icons` resolves each identifier to a renderable asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    ArrowLeft,
    Award,
    Brain,
    Calculator,
    Calendar,
    CheckCircle,
    Clock,
    DollarSign,
    Gamepad,
    Globe,
    Minus,
    Plane,
    Puzzle,
    RotateCcw,
    Route,
    Ship,
    Star,
    Target,
    TrendingDown,
    TrendingUp,
    Trophy,
    TriangleAlert,
    Truck,
    Users,
    XCircle,
    Zap,
}
