pub const PAGE: &str = "min-h-screen bg-[#050810] flex flex-col items-center pb-32 overflow-x-hidden text-white font-sans";
pub const LOADING: &str = "min-h-screen bg-[#050810] flex items-center justify-center text-gray-400 text-sm font-black uppercase tracking-[0.3em]";
pub const HEADER: &str = "w-full p-4 flex justify-between items-center max-w-5xl z-50";
pub const BRAND: &str = "text-4xl font-black italic tracking-tighter text-[#00a3ff] drop-shadow-[0_0_10px_#00a3ff]";
pub const WALLET_LABEL: &str = "text-[9px] text-gray-500 uppercase font-black tracking-widest";
pub const WALLET_AMOUNT: &str = "text-[#eab308] font-black text-xl drop-shadow-[0_0_5px_rgba(234,179,8,0.5)]";
pub const BUTTON_GOLD: &str = "bg-gradient-to-b from-[#fef3c7] via-[#eab308] to-[#92400e] text-black font-black px-6 py-2.5 rounded-lg shadow-[0_4px_15px_rgba(234,179,8,0.4)] hover:brightness-125 transition-all uppercase text-xs tracking-wider";
pub const HERO: &str = "text-center mt-6 px-4";
pub const HERO_BADGE: &str = "bg-[#ef4444] text-white text-[10px] font-black py-1.5 px-6 rounded-full inline-block mb-4 tracking-[0.2em] uppercase border border-white/20";
pub const HERO_TITLE: &str = "text-5xl md:text-7xl font-serif text-[#eab308] leading-tight drop-shadow-2xl mb-2";
pub const CONSOLE: &str = "mt-8 bg-gradient-to-b from-[#1a202c] to-[#0a0f1d] border border-white/10 rounded-[45px] p-7 w-full max-w-[440px] shadow-[0_0_80px_rgba(0,0,0,0.8)]";
pub const MESSAGE_LABEL: &str = "text-[10px] text-gray-500 uppercase tracking-[0.4em] mb-2 font-black";
pub const MESSAGE: &str = "text-xl font-black tracking-[0.1em] px-6 py-4 rounded-2xl bg-black/60 border border-white/10 shadow-inner text-white";
pub const MESSAGE_WIN: &str = "text-xl font-black tracking-[0.1em] px-6 py-4 rounded-2xl bg-black/60 border border-white/10 shadow-inner text-green-400 drop-shadow-[0_0_8px_#4ade80]";
pub const SPIN_BUTTON: &str = "w-full mt-8 bg-gradient-to-b from-[#fef3c7] via-[#eab308] to-[#92400e] text-black font-black py-5 rounded-2xl shadow-[0_8px_0_#78350f] active:translate-y-1 transition-all uppercase tracking-widest text-2xl disabled:opacity-30 disabled:grayscale";
pub const DOT_USED: &str = "w-4 h-4 rounded-full border-2 border-white/10 bg-[#eab308] shadow-[0_0_15px_#eab308]";
pub const DOT_UNUSED: &str = "w-4 h-4 rounded-full border-2 border-white/10 bg-gray-800";
pub const SPINS_LABEL: &str = "text-[10px] text-gray-400 font-black uppercase tracking-[0.2em]";
pub const BOARD: &str = "bg-[#0f172a] p-2 rounded-xl border border-[#1e293b] mt-4 shadow-inner";
pub const BOARD_ZERO: &str = "w-full h-8 mb-1 rounded font-bold text-xs transition-all border border-green-900/50 bg-[#064e3b] text-white opacity-80";
pub const BOARD_CELL_RED: &str = "h-9 w-full rounded font-black text-[10px] transition-all flex items-center justify-center bg-[#ef4444] text-white border-b-2 border-red-800";
pub const BOARD_CELL_BLACK: &str = "h-9 w-full rounded font-black text-[10px] transition-all flex items-center justify-center bg-[#1e293b] text-white border-b-2 border-black";
pub const BOARD_CELL_SELECTED: &str = "h-9 w-full rounded font-black text-[10px] transition-all flex items-center justify-center bg-gradient-to-b from-yellow-300 to-yellow-600 text-black scale-105 shadow-[0_0_15px_#eab308] z-10";
pub const BOARD_ZERO_SELECTED: &str = "w-full h-8 mb-1 rounded font-bold text-xs transition-all bg-gradient-to-b from-yellow-300 to-yellow-600 text-black shadow-[0_0_15px_#eab308]";
pub const OVERLAY: &str = "fixed inset-0 z-[100] flex items-center justify-center bg-black/95 backdrop-blur-xl p-4";
pub const POPUP_CARD: &str = "bg-gradient-to-b from-[#1a202c] to-[#0a0f1d] border-2 border-[#eab308] p-10 rounded-[40px] max-w-sm text-center shadow-[0_0_100px_rgba(234,179,8,0.2)]";
pub const POPUP_TITLE: &str = "text-4xl font-black text-[#eab308] mb-6 uppercase tracking-tighter drop-shadow-lg";
pub const POPUP_BODY: &str = "text-gray-300 mb-10 text-lg leading-relaxed font-medium";
pub const POPUP_BUTTON: &str = "w-full bg-gradient-to-b from-[#fef3c7] via-[#eab308] to-[#92400e] text-black font-black py-6 rounded-[20px] text-xl uppercase shadow-2xl hover:brightness-110 transition-all";
pub const FOOTER: &str = "fixed bottom-0 left-0 w-full p-4 bg-gradient-to-t from-[#050810] via-[#050810] to-transparent z-40";
pub const FOOTER_BUTTON: &str = "w-full max-w-lg mx-auto block bg-gradient-to-r from-[#00a3ff] to-[#0066ff] text-white font-black py-6 rounded-3xl shadow-[0_0_50px_rgba(0,163,255,0.4)] text-xl uppercase tracking-[0.1em] hover:brightness-110 transition-all";
pub const WHEEL_FRAME: &str = "relative mx-auto w-full max-w-[320px] aspect-square";
pub const WHEEL_POINTER: &str = "absolute left-1/2 -top-1 -translate-x-1/2 z-10 w-0 h-0 border-l-[10px] border-r-[10px] border-t-[18px] border-l-transparent border-r-transparent border-t-[#eab308]";
