//! Registry of Go standard-library import paths.

/// Sorted so lookups can binary search.
pub const STDLIB_PACKAGES: &[&str] = &[
    "archive/tar",
    "archive/zip",
    "bufio",
    "builtin",
    "bytes",
    "cmd/addr2line",
    "cmd/asm",
    "cmd/asm/internal/arch",
    "cmd/asm/internal/asm",
    "cmd/asm/internal/flags",
    "cmd/asm/internal/lex",
    "cmd/cgo",
    "cmd/compile",
    "cmd/compile/internal/amd64",
    "cmd/compile/internal/arm",
    "cmd/compile/internal/arm64",
    "cmd/compile/internal/gc",
    "cmd/compile/internal/mips",
    "cmd/compile/internal/mips64",
    "cmd/compile/internal/ppc64",
    "cmd/compile/internal/s390x",
    "cmd/compile/internal/ssa",
    "cmd/compile/internal/syntax",
    "cmd/compile/internal/test",
    "cmd/compile/internal/x86",
    "cmd/cover",
    "cmd/dist",
    "cmd/doc",
    "cmd/fix",
    "cmd/go",
    "cmd/gofmt",
    "cmd/internal/bio",
    "cmd/internal/browser",
    "cmd/internal/dwarf",
    "cmd/internal/gcprog",
    "cmd/internal/goobj",
    "cmd/internal/obj",
    "cmd/internal/obj/arm",
    "cmd/internal/obj/arm64",
    "cmd/internal/obj/mips",
    "cmd/internal/obj/ppc64",
    "cmd/internal/obj/s390x",
    "cmd/internal/obj/x86",
    "cmd/internal/objfile",
    "cmd/internal/sys",
    "cmd/link",
    "cmd/link/internal/amd64",
    "cmd/link/internal/arm",
    "cmd/link/internal/arm64",
    "cmd/link/internal/ld",
    "cmd/link/internal/mips",
    "cmd/link/internal/mips64",
    "cmd/link/internal/ppc64",
    "cmd/link/internal/s390x",
    "cmd/link/internal/x86",
    "cmd/nm",
    "cmd/objdump",
    "cmd/pack",
    "cmd/pprof",
    "cmd/pprof/internal/commands",
    "cmd/pprof/internal/driver",
    "cmd/pprof/internal/fetch",
    "cmd/pprof/internal/plugin",
    "cmd/pprof/internal/report",
    "cmd/pprof/internal/svg",
    "cmd/pprof/internal/symbolizer",
    "cmd/pprof/internal/symbolz",
    "cmd/pprof/internal/tempfile",
    "cmd/trace",
    "cmd/vendor/golang.org/x/arch/arm/armasm",
    "cmd/vendor/golang.org/x/arch/ppc64/ppc64asm",
    "cmd/vendor/golang.org/x/arch/x86/x86asm",
    "cmd/vet",
    "cmd/vet/internal/cfg",
    "cmd/vet/internal/whitelist",
    "cmp",
    "compress/bzip2",
    "compress/flate",
    "compress/gzip",
    "compress/lzw",
    "compress/zlib",
    "container/heap",
    "container/list",
    "container/ring",
    "context",
    "crypto",
    "crypto/aes",
    "crypto/cipher",
    "crypto/des",
    "crypto/dsa",
    "crypto/ecdh",
    "crypto/ecdsa",
    "crypto/ed25519",
    "crypto/elliptic",
    "crypto/hkdf",
    "crypto/hmac",
    "crypto/internal/cipherhw",
    "crypto/md5",
    "crypto/mlkem",
    "crypto/pbkdf2",
    "crypto/rand",
    "crypto/rc4",
    "crypto/rsa",
    "crypto/sha1",
    "crypto/sha256",
    "crypto/sha3",
    "crypto/sha512",
    "crypto/subtle",
    "crypto/tls",
    "crypto/x509",
    "crypto/x509/pkix",
    "database/sql",
    "database/sql/driver",
    "debug/buildinfo",
    "debug/dwarf",
    "debug/elf",
    "debug/gosym",
    "debug/macho",
    "debug/pe",
    "debug/plan9obj",
    "embed",
    "encoding",
    "encoding/ascii85",
    "encoding/asn1",
    "encoding/base32",
    "encoding/base64",
    "encoding/binary",
    "encoding/csv",
    "encoding/gob",
    "encoding/hex",
    "encoding/json",
    "encoding/json/v2",
    "encoding/pem",
    "encoding/xml",
    "errors",
    "expvar",
    "flag",
    "fmt",
    "go/ast",
    "go/build",
    "go/build/constraint",
    "go/constant",
    "go/doc",
    "go/format",
    "go/importer",
    "go/internal/gccgoimporter",
    "go/internal/gcimporter",
    "go/parser",
    "go/printer",
    "go/scanner",
    "go/token",
    "go/types",
    "go/version",
    "hash",
    "hash/adler32",
    "hash/crc32",
    "hash/crc64",
    "hash/fnv",
    "hash/maphash",
    "html",
    "html/template",
    "image",
    "image/color",
    "image/color/palette",
    "image/draw",
    "image/gif",
    "image/internal/imageutil",
    "image/jpeg",
    "image/png",
    "index/suffixarray",
    "internal/nettrace",
    "internal/pprof/profile",
    "internal/race",
    "internal/singleflight",
    "internal/syscall/unix",
    "internal/syscall/windows",
    "internal/syscall/windows/registry",
    "internal/syscall/windows/sysdll",
    "internal/testenv",
    "internal/trace",
    "io",
    "io/fs",
    "io/ioutil",
    "iter",
    "log",
    "log/slog",
    "log/syslog",
    "maps",
    "math",
    "math/big",
    "math/bits",
    "math/cmplx",
    "math/rand",
    "math/rand/v2",
    "mime",
    "mime/multipart",
    "mime/quotedprintable",
    "net",
    "net/http",
    "net/http/cgi",
    "net/http/cookiejar",
    "net/http/fcgi",
    "net/http/httptest",
    "net/http/httptrace",
    "net/http/httputil",
    "net/http/internal",
    "net/http/pprof",
    "net/internal/socktest",
    "net/mail",
    "net/netip",
    "net/rpc",
    "net/rpc/jsonrpc",
    "net/smtp",
    "net/textproto",
    "net/url",
    "os",
    "os/exec",
    "os/signal",
    "os/user",
    "path",
    "path/filepath",
    "plugin",
    "reflect",
    "regexp",
    "regexp/syntax",
    "runtime",
    "runtime/cgo",
    "runtime/coverage",
    "runtime/debug",
    "runtime/internal/atomic",
    "runtime/internal/sys",
    "runtime/metrics",
    "runtime/pprof",
    "runtime/pprof/internal/protopprof",
    "runtime/race",
    "runtime/trace",
    "slices",
    "sort",
    "strconv",
    "strings",
    "structs",
    "sync",
    "sync/atomic",
    "syscall",
    "testing",
    "testing/fstest",
    "testing/internal/testdeps",
    "testing/iotest",
    "testing/quick",
    "testing/slogtest",
    "testing/synctest",
    "text/scanner",
    "text/tabwriter",
    "text/template",
    "text/template/parse",
    "time",
    "time/tzdata",
    "unicode",
    "unicode/utf16",
    "unicode/utf8",
    "unique",
    "unsafe",
    "vendor/golang_org/x/crypto/chacha20poly1305",
    "vendor/golang_org/x/crypto/chacha20poly1305/internal/chacha20",
    "vendor/golang_org/x/crypto/curve25519",
    "vendor/golang_org/x/crypto/poly1305",
    "vendor/golang_org/x/net/http2/hpack",
    "vendor/golang_org/x/net/idna",
    "vendor/golang_org/x/net/lex/httplex",
    "vendor/golang_org/x/text/transform",
    "vendor/golang_org/x/text/unicode/norm",
    "vendor/golang_org/x/text/width",
    "weak",
];

/// Returns true when `import_path` names a package shipped with the Go toolchain.
pub fn is_stdlib(import_path: &str) -> bool {
    STDLIB_PACKAGES.binary_search(&import_path).is_ok()
}
